use crate::commands::{Command, CommandResult};
use crate::completion::Category;
use crate::error::{BookResult, ValidationError};
use crate::filter::ContactFilter;
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Shows contacts whose chosen field contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    filter: ContactFilter,
}

impl FindCommand {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` if `field` is not a contact
    /// field or no keyword is given.
    pub fn new<I, S>(field: Category, keywords: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            filter: ContactFilter::keywords(field, keywords)?,
        })
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        model.update_filter(self.filter.clone());
        let shown = model.filtered_contacts().len();
        Ok(CommandResult::new(format!("{shown} contacts listed!")))
    }
}
