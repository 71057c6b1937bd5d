use tracing::info;

use crate::commands::{Command, CommandResult};
use crate::contact::Contact;
use crate::error::{BookResult, ExecutionError};
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Adds a contact to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    contact: Contact,
}

impl AddCommand {
    /// Adds `contact` when executed.
    #[must_use]
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        model.ensure_unlocked()?;
        if model.has_contact(&self.contact) {
            return Err(ExecutionError::DuplicateContact {
                name: self.contact.name.to_string(),
            }
            .into());
        }
        model.add_contact(self.contact.clone())?;
        model.commit();
        info!(name = %self.contact.name, "contact added");
        Ok(CommandResult::new(format!("New contact added: {}", self.contact)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{alice, typical_model};
    use crate::completion::Category;
    use crate::error::BookError;

    #[test]
    fn adds_commits_and_indexes() {
        let mut model = typical_model();
        let dan = Contact::parse("Daniel Meier", "87652533", "cornelia@example.com", "10th street")
            .unwrap();
        let result = AddCommand::new(dan.clone())
            .execute(&mut model, &InputHistory::new())
            .unwrap();

        assert!(result.feedback.starts_with("New contact added: Daniel Meier"));
        assert!(model.has_contact(&dan));
        assert!(model.can_undo());
        assert_eq!(model.predict(Category::Name, "Da").unwrap(), vec!["Daniel Meier"]);
    }

    #[test]
    fn rejects_duplicate_without_commit() {
        let mut model = typical_model();
        let err = AddCommand::new(alice())
            .execute(&mut model, &InputHistory::new())
            .unwrap_err();
        assert!(matches!(
            err,
            BookError::Execution(ExecutionError::DuplicateContact { .. })
        ));
        assert!(!model.can_undo());
    }
}
