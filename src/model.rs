//! The contact model: live address book plus everything kept in step with it.
//!
//! Every mutation goes through [`ContactModel`], which applies it to the live
//! book and then synchronously updates the completion and tag indices.
//! Commands call [`ContactModel::commit`] after a successful mutation to
//! record an undo checkpoint.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::book::ContactBook;
use crate::completion::{parse_input, Category, CompletionIndex};
use crate::config::BookConfig;
use crate::contact::{Contact, Tag};
use crate::error::{BookError, BookResult, ExecutionError};
use crate::filter::ContactFilter;
use crate::history::SnapshotHistory;
use crate::lock::{Locker, Unlocked};
use crate::tags::TagIndex;

/// Address book state and its derived indices.
///
/// # Examples
///
/// ```
/// use contactbook::{BookConfig, Category, Contact, ContactBook, ContactModel};
///
/// let mut model = ContactModel::new(ContactBook::new(), BookConfig::default());
/// let alice = Contact::parse("Alice", "94351253", "alice@example.com", "Jurong").unwrap();
/// model.add_contact(alice).unwrap();
/// model.commit();
///
/// assert_eq!(model.predict(Category::Name, "Al").unwrap(), vec!["Alice"]);
/// assert_eq!(model.predict_input("find n/A").unwrap(), vec!["Alice"]);
///
/// model.undo().unwrap();
/// assert!(model.book().is_empty());
/// assert!(model.predict(Category::Name, "").unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ContactModel {
    book: ContactBook,
    history: SnapshotHistory<ContactBook>,
    completion: CompletionIndex,
    tags: TagIndex,
    filter: ContactFilter,
    selected: Vec<Contact>,
    locker: Arc<dyn Locker>,
    prediction_limit: Option<usize>,
}

impl ContactModel {
    /// Creates a model over `book`, which becomes the initial checkpoint.
    #[must_use]
    pub fn new(book: ContactBook, config: BookConfig) -> Self {
        let mut completion = CompletionIndex::with_commands(&config.command_words);
        completion.rebuild_fields(&book);
        let tags = TagIndex::from_book(&book);
        info!(
            contacts = book.len(),
            history_limit = config.history_limit,
            "contact model initialised"
        );
        Self {
            history: SnapshotHistory::new(book.clone(), config.history_limit),
            book,
            completion,
            tags,
            filter: ContactFilter::All,
            selected: Vec::new(),
            locker: Arc::new(Unlocked),
            prediction_limit: config.prediction_limit,
        }
    }

    /// Consults `locker` before locked-out commands run.
    #[must_use]
    pub fn with_locker(mut self, locker: Arc<dyn Locker>) -> Self {
        self.locker = locker;
        self
    }

    /// True while the address book is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locker.is_locked()
    }

    /// Fails if the address book is locked.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::Locked`.
    pub fn ensure_unlocked(&self) -> BookResult<()> {
        if self.is_locked() {
            return Err(ExecutionError::Locked.into());
        }
        Ok(())
    }

    /// The live address book.
    #[must_use]
    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// The completion index.
    #[must_use]
    pub fn completion(&self) -> &CompletionIndex {
        &self.completion
    }

    /// The tag index.
    #[must_use]
    pub fn tag_index(&self) -> &TagIndex {
        &self.tags
    }

    /// Returns true if a contact with the same identity exists.
    #[must_use]
    pub fn has_contact(&self, contact: &Contact) -> bool {
        self.book.contains(contact)
    }

    /// Adds a contact.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateContact` if the identity is already present.
    pub fn add_contact(&mut self, contact: Contact) -> BookResult<()> {
        self.book.add(contact.clone())?;
        self.completion.notify_inserted(&contact);
        self.tags.add_contact(&contact);
        Ok(())
    }

    /// Deletes the contact equal to `target`.
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if it is not in the book.
    pub fn delete_contact(&mut self, target: &Contact) -> BookResult<Contact> {
        let removed = self.book.remove(target)?;
        let synced = self
            .completion
            .notify_removed(&removed)
            .and_then(|()| self.tags.remove_contact(&removed));
        self.recover_indices(synced);
        Ok(removed)
    }

    /// Replaces `target` with `edited`.
    ///
    /// # Errors
    ///
    /// Returns `ContactNotFound` if `target` is absent, or `DuplicateContact`
    /// if `edited` clashes with another contact.
    pub fn update_contact(&mut self, target: &Contact, edited: Contact) -> BookResult<()> {
        let old = self.book.set_contact(target, edited.clone())?;
        let synced = self
            .completion
            .notify_edited(&old, &edited)
            .and_then(|()| self.tags.remove_contact(&old));
        self.tags.add_contact(&edited);
        self.recover_indices(synced);
        Ok(())
    }

    /// Removes every contact.
    pub fn clear(&mut self) {
        self.book.clear();
        self.completion.clear_fields();
        self.tags = TagIndex::new();
    }

    /// Replaces the live book wholesale and rebuilds the indices.
    /// History is not touched; commit to make it undoable.
    pub fn reset_data(&mut self, book: ContactBook) {
        self.book = book;
        self.rebuild_indices();
    }

    /// Records the live book as a new undo checkpoint, discarding redo steps.
    pub fn commit(&mut self) {
        self.history.commit(self.book.clone());
        info!(contacts = self.book.len(), "address book committed");
    }

    /// True iff an earlier checkpoint exists.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True iff an undone checkpoint exists.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous checkpoint and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NoHistory` if nothing can be undone.
    pub fn undo(&mut self) -> BookResult<&ContactBook> {
        let restored = self.history.undo()?.clone();
        self.reset_data(restored);
        Ok(&self.book)
    }

    /// Restores the next undone checkpoint and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NoHistory` if nothing can be redone.
    pub fn redo(&mut self) -> BookResult<&ContactBook> {
        let restored = self.history.redo()?.clone();
        self.reset_data(restored);
        Ok(&self.book)
    }

    /// Completion candidates for `prefix` in a category.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a malformed prefix.
    pub fn predict(&self, category: Category, prefix: &str) -> BookResult<Vec<String>> {
        let mut candidates = self.completion.predict(category, prefix)?;
        self.cap(&mut candidates);
        Ok(candidates)
    }

    /// Completion candidates for the fragment under the cursor of a raw
    /// input-box line. Input with nothing to complete yields no candidates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the input contains control characters.
    pub fn predict_input(&self, input: &str) -> BookResult<Vec<String>> {
        match parse_input(input) {
            Some(fragment) => self.predict(fragment.category, fragment.text),
            None => Ok(Vec::new()),
        }
    }

    /// Like [`predict_input`](Self::predict_input), but returns whole input
    /// lines with the fragment replaced by each candidate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the input contains control characters.
    pub fn complete_input(&self, input: &str) -> BookResult<Vec<String>> {
        let Some(fragment) = parse_input(input) else {
            return Ok(Vec::new());
        };
        Ok(self
            .predict(fragment.category, fragment.text)?
            .iter()
            .map(|candidate| fragment.complete(candidate))
            .collect())
    }

    /// The active display filter.
    #[must_use]
    pub fn filter(&self) -> &ContactFilter {
        &self.filter
    }

    /// Changes which contacts [`filtered_contacts`](Self::filtered_contacts) shows.
    pub fn update_filter(&mut self, filter: ContactFilter) {
        debug!(?filter, "display filter updated");
        self.filter = filter;
    }

    /// Contacts passing the active filter, in book order.
    #[must_use]
    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        self.book.iter().filter(|c| self.filter.matches(c)).collect()
    }

    /// Contacts carrying `tag`, in book order.
    ///
    /// # Errors
    ///
    /// Returns `TagNotFound` if no contact carries the tag.
    pub fn contacts_with_tag(&self, tag: &Tag) -> BookResult<Vec<&Contact>> {
        let keys = self.tags.contacts_with(tag)?;
        Ok(self
            .book
            .iter()
            .filter(|c| keys.contains(&c.key()))
            .collect())
    }

    /// Every tag in use.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.tags()
    }

    /// Replaces the selection. Selection is view state and is not recorded
    /// in the undo history.
    pub fn set_selected(&mut self, contacts: impl IntoIterator<Item = Contact>) {
        self.selected = contacts.into_iter().collect();
        debug!(selected = self.selected.len(), "selection updated");
    }

    /// Selected contacts still in the book, in book order.
    #[must_use]
    pub fn selected_contacts(&self) -> Vec<&Contact> {
        self.book
            .iter()
            .filter(|c| self.selected.contains(c))
            .collect()
    }

    fn cap(&self, candidates: &mut Vec<String>) {
        if let Some(limit) = self.prediction_limit {
            candidates.truncate(limit);
        }
    }

    fn rebuild_indices(&mut self) {
        self.completion.rebuild_fields(&self.book);
        self.tags = TagIndex::from_book(&self.book);
    }

    /// The indices should always agree with the book; if an incremental
    /// update finds otherwise, rebuild them from the book.
    fn recover_indices(&mut self, synced: BookResult<()>) {
        if let Err(e) = synced {
            warn!(error = %e, "index out of step with address book; rebuilding");
            self.rebuild_indices();
        }
    }
}

impl From<ContactBook> for ContactModel {
    fn from(book: ContactBook) -> Self {
        Self::new(book, BookConfig::default())
    }
}

impl TryFrom<(ContactBook, &str)> for ContactModel {
    type Error = BookError;

    /// Builds a model from a book and a JSON configuration document.
    fn try_from((book, config): (ContactBook, &str)) -> BookResult<Self> {
        Ok(Self::new(book, BookConfig::from_json(config)?))
    }
}
