//! JSON file backend.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use uuid::Uuid;

use crate::book::ContactBook;
use crate::storage::traits::{BookStore, StorageError};

/// Stores the address book as pretty-printed JSON in one file.
///
/// Saves write a temporary sibling file, fsync it, then rename it over the
/// target, so a crash mid-save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by the file at `path`, which need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<Option<ContactBook>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "address book file not found; starting empty");
                return Ok(None);
            }
            Err(e) => return Err(self.io_err(e)),
        };

        let book: ContactBook = serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        info!(path = %self.path.display(), contacts = book.len(), "address book loaded");
        Ok(Some(book))
    }

    fn save(&self, book: &ContactBook) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        let temp_path = self.path.with_extension(format!("json.tmp.{}", Uuid::new_v4()));
        let written = write_json(&temp_path, book).and_then(|()| {
            fs::rename(&temp_path, &self.path).map_err(|e| self.io_err(e))
        });
        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        written?;

        info!(path = %self.path.display(), contacts = book.len(), "address book saved");
        Ok(())
    }
}

fn write_json(path: &Path, book: &ContactBook) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, book)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    writer.flush().map_err(io_err)?;
    writer.get_ref().sync_all().map_err(io_err)?;
    Ok(())
}
