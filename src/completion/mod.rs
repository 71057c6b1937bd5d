//! Autocomplete engine.
//!
//! A [`CompletionIndex`] holds one [`Trie`] per [`Category`] and answers
//! prefix queries for the input box. [`parse_input`] locates the fragment of
//! a raw input line that a suggestion would replace.

mod category;
mod index;
mod input;
mod trie;

pub use category::Category;
pub use index::{CompletionIndex, DEFAULT_COMMAND_WORDS};
pub use input::{parse_input, InputFragment};
pub use trie::Trie;
