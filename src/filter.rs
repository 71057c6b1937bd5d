//! Predicates selecting which contacts the displayed list shows.

use std::collections::BTreeSet;

use crate::completion::Category;
use crate::contact::{Contact, Tag};
use crate::error::ValidationError;

/// Which contacts are currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactFilter {
    /// Every contact.
    #[default]
    All,
    /// Contacts whose field contains any keyword as a whole word. Name and
    /// address words ignore case; phone and email tokens must match exactly.
    Keywords {
        /// Field searched.
        category: Category,
        /// Words to look for.
        keywords: Vec<String>,
    },
    /// Contacts carrying at least one of the tags.
    AnyTag(BTreeSet<Tag>),
}

impl ContactFilter {
    /// Builds a keyword filter over one contact field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidArgument` if `category` is not a
    /// contact field or no keyword is given.
    pub fn keywords<I, S>(category: Category, keywords: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if category == Category::Command {
            return Err(ValidationError::invalid_argument(
                category.label(),
                "keywords can only match contact fields",
            ));
        }
        let keywords: Vec<String> = keywords
            .into_iter()
            .flat_map(|k| {
                k.as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        if keywords.is_empty() {
            return Err(ValidationError::invalid_argument(
                "keywords",
                "at least one keyword is required",
            ));
        }
        Ok(Self::Keywords { category, keywords })
    }

    /// Returns true if the contact passes the filter.
    #[must_use]
    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            Self::All => true,
            Self::Keywords { category, keywords } => category
                .value_of(contact)
                .is_some_and(|value| keywords.iter().any(|k| contains_word(*category, value, k))),
            Self::AnyTag(tags) => tags.iter().any(|t| contact.has_tag(t)),
        }
    }
}

fn contains_word(category: Category, text: &str, word: &str) -> bool {
    match category {
        Category::Phone | Category::Email => text.split_whitespace().any(|token| token == word),
        _ => {
            let word = word.to_lowercase();
            text.split_whitespace()
                .any(|candidate| candidate.to_lowercase() == word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact::parse("Alice Pauline", "94351253", "alice@example.com", "123 Jurong West")
            .unwrap()
            .with_tags(["friends"])
            .unwrap()
    }

    #[test]
    fn all_matches_everything() {
        assert!(ContactFilter::All.matches(&contact()));
    }

    #[test]
    fn name_and_address_keywords_ignore_case() {
        let f = ContactFilter::keywords(Category::Name, ["pauline"]).unwrap();
        assert!(f.matches(&contact()));

        let f = ContactFilter::keywords(Category::Name, ["Paul"]).unwrap();
        assert!(!f.matches(&contact()));

        let f = ContactFilter::keywords(Category::Address, ["bob jurong"]).unwrap();
        assert!(f.matches(&contact()));

    }

    #[test]
    fn phone_and_email_tokens_match_exactly() {
        let f = ContactFilter::keywords(Category::Phone, ["94351253"]).unwrap();
        assert!(f.matches(&contact()));
        let f = ContactFilter::keywords(Category::Phone, ["9435"]).unwrap();
        assert!(!f.matches(&contact()));

        let f = ContactFilter::keywords(Category::Email, ["alice@example.com"]).unwrap();
        assert!(f.matches(&contact()));
        let f = ContactFilter::keywords(Category::Email, ["ALICE@EXAMPLE.COM"]).unwrap();
        assert!(!f.matches(&contact()));
    }

    #[test]
    fn keywords_require_a_field_and_a_word() {
        assert!(ContactFilter::keywords(Category::Command, ["add"]).is_err());
        assert!(ContactFilter::keywords(Category::Name, ["  "]).is_err());
        assert!(ContactFilter::keywords(Category::Name, Vec::<String>::new()).is_err());
    }

    #[test]
    fn any_tag() {
        let tags: BTreeSet<Tag> = [Tag::new("colleagues").unwrap(), Tag::new("friends").unwrap()]
            .into_iter()
            .collect();
        assert!(ContactFilter::AnyTag(tags).matches(&contact()));
        let none: BTreeSet<Tag> = [Tag::new("family").unwrap()].into_iter().collect();
        assert!(!ContactFilter::AnyTag(none).matches(&contact()));
    }
}
