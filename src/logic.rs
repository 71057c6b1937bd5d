//! Entry point used by the input box: runs commands and answers completion queries.

use tracing::{info, warn};

use crate::commands::{Command, CommandResult};
use crate::error::BookResult;
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Owns the model and the record of entered command lines.
#[derive(Debug)]
pub struct Logic {
    model: ContactModel,
    inputs: InputHistory,
}

impl Logic {
    /// Wraps `model` with an empty input history.
    #[must_use]
    pub fn new(model: ContactModel) -> Self {
        Self {
            model,
            inputs: InputHistory::new(),
        }
    }

    /// Runs `command`, which the caller parsed from `input`.
    ///
    /// The input line is recorded whether or not the command succeeds.
    ///
    /// # Errors
    ///
    /// Whatever the command returns.
    pub fn execute(&mut self, input: &str, command: &dyn Command) -> BookResult<CommandResult> {
        info!(input, "executing command");
        let result = command.execute(&mut self.model, &self.inputs);
        if let Err(e) = &result {
            warn!(input, error = %e, "command failed");
        }
        self.inputs.add(input);
        result
    }

    /// Completion candidates for the current input-box text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a malformed fragment.
    pub fn predict(&self, input: &str) -> BookResult<Vec<String>> {
        self.model.predict_input(input)
    }

    /// The contact model.
    #[must_use]
    pub fn model(&self) -> &ContactModel {
        &self.model
    }

    /// Command lines entered so far.
    #[must_use]
    pub fn inputs(&self) -> &InputHistory {
        &self.inputs
    }

    /// Mutable access to the input history for up/down navigation.
    pub fn inputs_mut(&mut self) -> &mut InputHistory {
        &mut self.inputs
    }

    /// Consumes the logic and returns the model.
    #[must_use]
    pub fn into_model(self) -> ContactModel {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{HistoryCommand, UndoCommand};
    use crate::commands::fixtures::typical_model;

    #[test]
    fn records_inputs_even_on_failure() {
        let mut logic = Logic::new(typical_model());
        assert!(logic.execute("undo", &UndoCommand).is_err());
        let result = logic.execute("history", &HistoryCommand).unwrap();
        assert!(result.feedback.ends_with("\nundo"));
        assert_eq!(logic.inputs().len(), 2);
    }

    #[test]
    fn predicts_from_model() {
        let logic = Logic::new(typical_model());
        assert_eq!(logic.predict("find n/Ca").unwrap(), vec!["Carl Kurz"]);
        assert_eq!(logic.predict("hi").unwrap(), vec!["history"]);
    }
}
