use std::collections::BTreeSet;

use crate::commands::{Command, CommandResult};
use crate::contact::Tag;
use crate::error::{BookResult, ExecutionError};
use crate::filter::ContactFilter;
use crate::history::InputHistory;
use crate::model::ContactModel;

/// Shows every contact, or only those carrying any of the given tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCommand {
    tags: BTreeSet<Tag>,
}

impl ListCommand {
    /// Lists every contact.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Lists contacts carrying any of `tags`.
    #[must_use]
    pub fn tagged(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, model: &mut ContactModel, _inputs: &InputHistory) -> BookResult<CommandResult> {
        if self.tags.is_empty() {
            model.update_filter(ContactFilter::All);
            return Ok(CommandResult::new("Listed all contacts"));
        }

        if !self.tags.iter().any(|t| model.tag_index().has_tag(t)) {
            let tag = self
                .tags
                .iter()
                .map(Tag::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ExecutionError::TagNotFound { tag }.into());
        }

        model.update_filter(ContactFilter::AnyTag(self.tags.clone()));
        let shown = model.filtered_contacts().len();
        Ok(CommandResult::new(format!("Listed {shown} tagged contacts")))
    }
}
