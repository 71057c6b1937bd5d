//! Tag index: which contacts carry which tag.
//!
//! Maintained alongside the address book by the model. Removal of an
//! absent tag or key is reported as `TagNotFound` rather than ignored.

use std::collections::{BTreeMap, BTreeSet};

use crate::book::ContactBook;
use crate::contact::{Contact, ContactKey, Tag};
use crate::error::{BookResult, ExecutionError};

/// Maps every tag in use to the identity keys of the contacts carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    by_tag: BTreeMap<Tag, BTreeSet<ContactKey>>,
}

impl TagIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from every contact in a book.
    #[must_use]
    pub fn from_book(book: &ContactBook) -> Self {
        let mut index = Self::new();
        for contact in book {
            index.add_contact(contact);
        }
        index
    }

    /// Returns true if any contact carries the tag.
    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.by_tag.contains_key(tag)
    }

    /// All tags in use, in order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.by_tag.keys()
    }

    /// Identity keys of contacts carrying the tag.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::TagNotFound` if no contact carries the tag.
    pub fn contacts_with(&self, tag: &Tag) -> BookResult<&BTreeSet<ContactKey>> {
        self.by_tag.get(tag).ok_or_else(|| not_found(tag))
    }

    /// Records a single tag for a contact.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::DuplicateTag` if already recorded.
    pub fn add(&mut self, tag: Tag, key: ContactKey) -> BookResult<()> {
        let keys = self.by_tag.entry(tag.clone()).or_default();
        if keys.contains(&key) {
            return Err(ExecutionError::DuplicateTag {
                tag: tag.to_string(),
                name: key.name.to_string(),
            }
            .into());
        }
        keys.insert(key);
        Ok(())
    }

    /// Removes a single tag from a contact, dropping the tag once unused.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::TagNotFound` if the pair is not recorded.
    pub fn remove(&mut self, tag: &Tag, key: &ContactKey) -> BookResult<()> {
        let keys = self.by_tag.get_mut(tag).ok_or_else(|| not_found(tag))?;
        if !keys.remove(key) {
            return Err(not_found(tag));
        }
        if keys.is_empty() {
            self.by_tag.remove(tag);
        }
        Ok(())
    }

    /// Records every tag of a contact. Already-recorded pairs are left as is.
    pub fn add_contact(&mut self, contact: &Contact) {
        let key = contact.key();
        for tag in &contact.tags {
            self.by_tag.entry(tag.clone()).or_default().insert(key.clone());
        }
    }

    /// Removes every tag of a contact.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::TagNotFound` if one of the contact's tags was
    /// not recorded for it; the remaining tags are still removed.
    pub fn remove_contact(&mut self, contact: &Contact) -> BookResult<()> {
        let key = contact.key();
        let mut first_error = None;
        for tag in &contact.tags {
            if let Err(e) = self.remove(tag, &key) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Number of distinct tags in use.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Returns true if no tags are in use.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

fn not_found(tag: &Tag) -> crate::error::BookError {
    ExecutionError::TagNotFound {
        tag: tag.to_string(),
    }
    .into()
}
