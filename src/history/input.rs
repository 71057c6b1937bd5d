//! Raw command text entered by the user.

/// Every submitted command line, with up/down navigation for the input box.
#[derive(Debug, Clone, Default)]
pub struct InputHistory {
    entries: Vec<String>,
    /// Navigation cursor; `entries.len()` means "past the newest entry".
    cursor: usize,
    /// Input being typed before navigation started.
    draft: String,
}

impl InputHistory {
    /// An empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted line and resets navigation.
    pub fn add(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
        self.draft.clear();
    }

    /// Entries from newest to oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been entered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Steps to the next older entry. `current_input` is kept as the draft
    /// when navigation starts.
    pub fn older(&mut self, current_input: &str) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        if self.cursor == self.entries.len() {
            self.draft = current_input.to_string();
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps to the next newer entry, ending at the saved draft.
    pub fn newer(&mut self) -> Option<&str> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(
            self.entries
                .get(self.cursor)
                .map_or(self.draft.as_str(), String::as_str),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_order() {
        let mut history = InputHistory::new();
        history.add("list");
        history.add("delete 1");
        let entries: Vec<_> = history.newest_first().collect();
        assert_eq!(entries, vec!["delete 1", "list"]);
    }

    #[test]
    fn navigation_restores_draft() {
        let mut history = InputHistory::new();
        assert_eq!(history.older("x"), None);

        history.add("list");
        history.add("undo");

        assert_eq!(history.older("fi"), Some("undo"));
        assert_eq!(history.older("ignored"), Some("list"));
        assert_eq!(history.older("ignored"), None);
        assert_eq!(history.newer(), Some("undo"));
        assert_eq!(history.newer(), Some("fi"));
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn add_resets_navigation() {
        let mut history = InputHistory::new();
        history.add("list");
        history.older("");
        history.add("clear");
        assert_eq!(history.older(""), Some("clear"));
    }
}
