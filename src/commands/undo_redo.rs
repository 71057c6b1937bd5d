use crate::commands::{Command, CommandResult};
use crate::error::BookResult;
use crate::filter::ContactFilter;
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Restores the address book to its previous checkpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoCommand;

/// Reapplies the most recently undone checkpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedoCommand;

impl Command for UndoCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        model.ensure_unlocked()?;
        model.undo()?;
        model.update_filter(ContactFilter::All);
        Ok(CommandResult::new("Undo success!"))
    }
}

impl Command for RedoCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        model.ensure_unlocked()?;
        model.redo()?;
        model.update_filter(ContactFilter::All);
        Ok(CommandResult::new("Redo success!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{carl, typical_model};
    use crate::commands::{DeleteCommand, Index};

    #[test]
    fn undo_and_redo_a_deletion() {
        let mut model = typical_model();
        let inputs = InputHistory::new();
        DeleteCommand::new([Index::from_one_based(3).unwrap()])
            .unwrap()
            .execute(&mut model, &inputs)
            .unwrap();
        assert!(!model.has_contact(&carl()));

        assert_eq!(
            UndoCommand.execute(&mut model, &inputs).unwrap().feedback,
            "Undo success!"
        );
        assert!(model.has_contact(&carl()));

        assert_eq!(
            RedoCommand.execute(&mut model, &inputs).unwrap().feedback,
            "Redo success!"
        );
        assert!(!model.has_contact(&carl()));
    }

    #[test]
    fn empty_stacks_fail() {
        let mut model = typical_model();
        let inputs = InputHistory::new();
        let err = UndoCommand.execute(&mut model, &inputs).unwrap_err();
        assert_eq!(err.to_string(), "Execution error: No more commands to undo");
        assert!(RedoCommand.execute(&mut model, &inputs).unwrap_err().is_no_history());
    }
}
