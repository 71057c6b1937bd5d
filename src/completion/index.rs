//! Per-category completion index kept in step with the address book.

use std::collections::HashMap;

use tracing::debug;

use crate::book::ContactBook;
use crate::completion::category::Category;
use crate::completion::trie::Trie;
use crate::contact::Contact;
use crate::error::{BookResult, ExecutionError, ValidationError};

/// Command words offered when the input has no argument yet.
pub const DEFAULT_COMMAND_WORDS: [&str; 12] = [
    "add", "clear", "delete", "edit", "exit", "find", "help", "history", "list", "redo", "select",
    "undo",
];

/// Maps each [`Category`] to a prefix tree of its current values.
///
/// Field categories are reference counted: several contacts may share a
/// value (two people at one address), and the value stays predictable until
/// the last of them is removed. The direct [`insert`](Self::insert) and
/// [`remove`](Self::remove) operations have set semantics and bypass the
/// counts.
#[derive(Debug, Clone, Default)]
pub struct CompletionIndex {
    tries: HashMap<Category, Trie>,
    counts: HashMap<Category, HashMap<String, usize>>,
}

impl CompletionIndex {
    /// Creates an index holding the default command words and no field values.
    #[must_use]
    pub fn new() -> Self {
        Self::with_commands(DEFAULT_COMMAND_WORDS)
    }

    /// Creates an index holding the given command words and no field values.
    #[must_use]
    pub fn with_commands<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        index.build(Category::Command, commands);
        index
    }

    /// Populates every field category from the contacts of a book.
    pub fn rebuild_fields(&mut self, book: &ContactBook) {
        for category in Category::FIELDS {
            self.build(category, book.iter().filter_map(|c| category.value_of(c)));
        }
        debug!(contacts = book.len(), "completion index rebuilt");
    }

    /// Constructs or replaces the index for a category. Duplicates collapse.
    pub fn build<I, S>(&mut self, category: Category, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for value in values {
            let value = value.as_ref();
            trie.insert(value);
            *counts.entry(value.to_string()).or_default() += 1;
        }
        self.tries.insert(category, trie);
        self.counts.insert(category, counts);
    }

    /// Adds one value. Inserting a present value changes nothing.
    pub fn insert(&mut self, category: Category, value: &str) {
        if self.tries.entry(category).or_default().insert(value) {
            self.counts
                .entry(category)
                .or_default()
                .insert(value.to_string(), 1);
        }
    }

    /// Removes one value regardless of how many contacts hold it.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::ValueNotFound` if the value is not indexed.
    pub fn remove(&mut self, category: Category, value: &str) -> BookResult<()> {
        let removed = self
            .tries
            .get_mut(&category)
            .is_some_and(|trie| trie.remove(value));
        if !removed {
            return Err(value_not_found(category, value));
        }
        if let Some(counts) = self.counts.get_mut(&category) {
            counts.remove(value);
        }
        Ok(())
    }

    /// Returns true if the value is indexed under the category.
    #[must_use]
    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.tries
            .get(&category)
            .is_some_and(|trie| trie.contains(value))
    }

    /// Every indexed value in the category starting with `prefix`.
    ///
    /// Matching is literal and case-sensitive; results are ordered
    /// lexicographically by character. An empty prefix returns every value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` if the prefix contains a
    /// control character, which no input-box query can produce.
    pub fn predict(&self, category: Category, prefix: &str) -> BookResult<Vec<String>> {
        validate_prefix(prefix)?;
        Ok(self
            .tries
            .get(&category)
            .map(|trie| trie.predict(prefix))
            .unwrap_or_default())
    }

    /// Like [`predict`](Self::predict) but addressed by category label.
    /// An unknown label yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` for a malformed prefix.
    pub fn predict_label(&self, label: &str, prefix: &str) -> BookResult<Vec<String>> {
        match label.parse::<Category>() {
            Ok(category) => self.predict(category, prefix),
            Err(_) => {
                validate_prefix(prefix)?;
                Ok(Vec::new())
            }
        }
    }

    /// Records the field values of a newly inserted contact.
    pub fn notify_inserted(&mut self, contact: &Contact) {
        for category in Category::FIELDS {
            if let Some(value) = category.value_of(contact) {
                self.acquire(category, value);
            }
        }
        debug!(name = %contact.name, "contact indexed for completion");
    }

    /// Releases the field values of a removed contact.
    ///
    /// All four values are checked before any is released, so a failure
    /// leaves the index untouched.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::ValueNotFound` if one of the values is not indexed.
    pub fn notify_removed(&mut self, contact: &Contact) -> BookResult<()> {
        for category in Category::FIELDS {
            if let Some(value) = category.value_of(contact) {
                if !self.contains(category, value) {
                    return Err(value_not_found(category, value));
                }
            }
        }
        for category in Category::FIELDS {
            if let Some(value) = category.value_of(contact) {
                self.release(category, value);
            }
        }
        debug!(name = %contact.name, "contact released from completion");
        Ok(())
    }

    /// Replaces the values of `old` with those of `new`.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::ValueNotFound` if `old` was not indexed; the
    /// index is left untouched in that case.
    pub fn notify_edited(&mut self, old: &Contact, new: &Contact) -> BookResult<()> {
        self.notify_removed(old)?;
        self.notify_inserted(new);
        Ok(())
    }

    /// Drops every field value, keeping command words.
    pub fn clear_fields(&mut self) {
        for category in Category::FIELDS {
            self.tries.remove(&category);
            self.counts.remove(&category);
        }
    }

    fn acquire(&mut self, category: Category, value: &str) {
        let count = self
            .counts
            .entry(category)
            .or_default()
            .entry(value.to_string())
            .or_default();
        *count += 1;
        if *count == 1 {
            self.tries.entry(category).or_default().insert(value);
        }
    }

    fn release(&mut self, category: Category, value: &str) {
        let Some(counts) = self.counts.get_mut(&category) else {
            return;
        };
        match counts.get_mut(value) {
            Some(count) if *count > 1 => *count -= 1,
            _ => {
                counts.remove(value);
                if let Some(trie) = self.tries.get_mut(&category) {
                    trie.remove(value);
                }
            }
        }
    }
}

fn validate_prefix(prefix: &str) -> Result<(), ValidationError> {
    if prefix.chars().any(char::is_control) {
        return Err(ValidationError::invalid_argument(
            prefix.escape_debug().to_string(),
            "completion prefix must not contain control characters",
        ));
    }
    Ok(())
}

fn value_not_found(category: Category, value: &str) -> crate::error::BookError {
    ExecutionError::ValueNotFound {
        category: category.to_string(),
        value: value.to_string(),
    }
    .into()
}
