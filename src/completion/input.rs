//! Locating the fragment of raw input-box text that is being completed.
//!
//! The first word of the input is a command word. After it, arguments are
//! written as `n/NAME p/PHONE e/EMAIL a/ADDRESS t/TAG`; the fragment under
//! the cursor is whatever follows the last argument prefix.

use crate::completion::category::Category;

/// The part of an input line a completion would replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFragment<'a> {
    /// Word list to complete from.
    pub category: Category,
    /// Text typed so far for this fragment.
    pub text: &'a str,
    /// Byte offset of `text` in the input line.
    pub offset: usize,
    line: &'a str,
}

impl InputFragment<'_> {
    /// Returns the input line with this fragment replaced by `candidate`.
    #[must_use]
    pub fn complete(&self, candidate: &str) -> String {
        let head = &self.line[..self.line.len() - self.text.len()];
        let mut line = String::with_capacity(head.len() + candidate.len());
        line.push_str(head);
        line.push_str(candidate);
        line
    }
}

/// Finds the fragment being completed, if any.
///
/// - A single word (no whitespace yet) is a command-word fragment.
/// - Otherwise the fragment follows the last `x/` argument prefix; names and
///   addresses may span several words, phones and emails may not.
/// - Tags (`t/`), unknown prefixes, and bare arguments such as indices have
///   nothing to complete.
#[must_use]
pub fn parse_input(input: &str) -> Option<InputFragment<'_>> {
    let start = input.len() - input.trim_start().len();
    let body = &input[start..];
    if body.is_empty() {
        return None;
    }
    if !body.contains(char::is_whitespace) {
        return Some(InputFragment {
            category: Category::Command,
            text: body,
            offset: start,
            line: input,
        });
    }

    let (token_start, token) = token_starts(input)
        .skip(1)
        .filter(|&(_, token)| is_argument_prefix(token))
        .last()?;

    let (category, text) = Category::from_argument_prefix(token)?;
    let offset = token_start + token.len() - text.len();
    let text = &input[offset..];
    if matches!(category, Category::Phone | Category::Email) && text.contains(char::is_whitespace) {
        return None;
    }
    Some(InputFragment {
        category,
        text,
        offset,
        line: input,
    })
}

/// Yields `(byte offset, rest of input)` at the start of every token.
fn token_starts(input: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut previous_was_space = true;
    input.char_indices().filter_map(move |(i, ch)| {
        let starts_token = previous_was_space && !ch.is_whitespace();
        previous_was_space = ch.is_whitespace();
        starts_token.then(|| (i, &input[i..]))
    })
}

fn is_argument_prefix(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), Some('/')) if c.is_ascii_alphabetic())
}
