//! # contactbook - contact management core
//!
//! An in-memory address book with undo/redo history and prefix-tree
//! autocomplete for the command input box.
//!
//! ## Core Concepts
//!
//! - **Contact**: a validated record (name, phone, email, address, tags),
//!   identified by name and phone
//! - **ContactBook**: an ordered, identity-unique collection whose clones are
//!   independent copy-on-write snapshots
//! - **SnapshotHistory**: bounded past/future stacks giving commit, undo and redo
//! - **CompletionIndex**: one trie per category (command, name, phone, email,
//!   address), kept in step with the book
//! - **ContactModel**: the live book plus its indices and history; commands
//!   receive it explicitly
//!
//! ## Usage
//!
//! ```rust
//! use contactbook::{AddCommand, Contact, ContactBook, ContactModel, Logic, UndoCommand};
//!
//! let mut logic = Logic::new(ContactModel::from(ContactBook::new()));
//! let alice = Contact::parse("Alice", "94351253", "alice@example.com", "Jurong West").unwrap();
//!
//! logic.execute("add n/Alice ...", &AddCommand::new(alice)).unwrap();
//! assert_eq!(logic.predict("find n/Al").unwrap(), vec!["Alice"]);
//!
//! logic.execute("undo", &UndoCommand).unwrap();
//! assert!(logic.predict("find n/Al").unwrap().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod book;
pub mod commands;
pub mod completion;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod history;
pub mod lock;
pub mod logic;
pub mod model;
pub mod storage;
pub mod tags;

// Re-export primary types at crate root for convenience
pub use book::ContactBook;
pub use commands::{
    AddCommand, ClearCommand, Command, CommandResult, DeleteCommand, EditCommand, EditDescriptor,
    FindCommand, HistoryCommand, Index, ListCommand, MailCommand, MailTarget, RedoCommand,
    SelectCommand, UndoCommand,
};
pub use completion::{parse_input, Category, CompletionIndex, InputFragment, Trie};
pub use config::BookConfig;
pub use contact::{Address, Contact, ContactKey, Email, Name, Phone, Tag};
pub use error::{BookError, BookResult, ExecutionError, HistoryAction, ValidationError};
pub use filter::ContactFilter;
pub use history::{InputHistory, SnapshotHistory};
pub use lock::{LockFlag, Locker, Unlocked};
pub use logic::Logic;
pub use model::ContactModel;
pub use storage::{BookStore, InMemoryBookStore, JsonFileStore, StorageError};
pub use tags::TagIndex;
