//! Commands executed against a [`ContactModel`].
//!
//! Commands are constructed as typed values; parsing the textual command
//! line is the caller's job. Every mutating command commits an undo
//! checkpoint once it has succeeded, and leaves the model untouched when it
//! fails. Mutating commands and mail refuse to run while the book is locked.

mod add;
mod clear;
mod delete;
mod edit;
mod find;
mod history;
mod list;
mod mail;
mod select;
mod undo_redo;

use std::fmt;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditDescriptor};
pub use find::FindCommand;
pub use history::HistoryCommand;
pub use list::ListCommand;
pub use mail::{MailCommand, MailTarget};
pub use select::SelectCommand;
pub use undo_redo::{RedoCommand, UndoCommand};

use crate::contact::Contact;
use crate::error::{BookResult, ExecutionError, ValidationError};
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Feedback shown to the user after a command succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message for the user.
    pub feedback: String,
}

impl CommandResult {
    /// Wraps a feedback message.
    #[must_use]
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback)
    }
}

/// An executable command.
pub trait Command: fmt::Debug {
    /// Runs the command against `model`. `inputs` holds the command lines
    /// entered so far.
    ///
    /// # Errors
    ///
    /// Any `BookError`; the model is unchanged when an error is returned.
    fn execute(&self, model: &mut ContactModel, inputs: &InputHistory)
        -> BookResult<CommandResult>;
}

/// A one-based position in the displayed contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Creates an index from a one-based position.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` for zero.
    pub fn from_one_based(position: usize) -> Result<Self, ValidationError> {
        if position == 0 {
            return Err(ValidationError::invalid_argument(
                "index",
                "must be a positive integer",
            ));
        }
        Ok(Self(position - 1))
    }

    /// Creates an index from a zero-based position.
    #[must_use]
    pub const fn from_zero_based(position: usize) -> Self {
        Self(position)
    }

    /// Position counted from zero.
    #[must_use]
    pub const fn zero_based(self) -> usize {
        self.0
    }

    /// Position counted from one, as displayed.
    #[must_use]
    pub const fn one_based(self) -> usize {
        self.0 + 1
    }
}

/// Looks up the contact at `index` in the displayed list.
fn displayed_contact(model: &ContactModel, index: Index) -> BookResult<Contact> {
    let shown = model.filtered_contacts();
    shown
        .get(index.zero_based())
        .map(|c| (*c).clone())
        .ok_or_else(|| {
            ExecutionError::InvalidIndex {
                index: index.one_based(),
                len: shown.len(),
            }
            .into()
        })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::book::ContactBook;
    use crate::contact::Contact;
    use crate::model::ContactModel;

    pub fn alice() -> Contact {
        Contact::parse("Alice Pauline", "94351253", "alice@example.com", "123, Jurong West Ave 6")
            .unwrap()
            .with_tags(["friends"])
            .unwrap()
    }

    pub fn benson() -> Contact {
        Contact::parse("Benson Meier", "98765432", "johnd@example.com", "311, Clementi Ave 2")
            .unwrap()
            .with_tags(["owesMoney", "friends"])
            .unwrap()
    }

    pub fn carl() -> Contact {
        Contact::parse("Carl Kurz", "95352563", "heinz@example.com", "wall street").unwrap()
    }

    pub fn typical_model() -> ContactModel {
        ContactModel::from(ContactBook::from_contacts([alice(), benson(), carl()]).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversions() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
        assert_eq!(Index::from_zero_based(0).one_based(), 1);
        assert!(Index::from_one_based(0).is_err());
    }

    #[test]
    fn test_displayed_contact_out_of_range() {
        let model = fixtures::typical_model();
        assert_eq!(
            displayed_contact(&model, Index::from_zero_based(1)).unwrap(),
            fixtures::benson()
        );
        let err = displayed_contact(&model, Index::from_zero_based(3)).unwrap_err();
        assert!(err.to_string().contains("index 4"));
    }
}
