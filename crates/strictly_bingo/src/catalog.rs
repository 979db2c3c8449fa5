//! The catalog of terms a card is built from.

use crate::error::CatalogError;
use crate::position::CELL_COUNT;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, instrument};

const BUILTIN_TERMS: [&str; CELL_COUNT] = [
    "One more thing",
    "You're going to love it",
    "Camera zooming around Apple Park",
    "Someone on a roof",
    "Emotional Steve mention",
    "Xcode for iPad",
    "AI chat in Xcode",
    "iOS 26",
    "Joke about Craig",
    "GOOD MORNEENG",
    "Ford mentioned",
    "Most immersive ever",
    "Update is available RIGHT NOW",
    "Hair Force One",
    "New Icons",
    "A Sherlocking",
    "Our biggest update ever!",
    "AAA Game",
    "Old Game out on macOS",
    "Unified Experience",
    "Only Apple can do this",
    "Android Trash Talk",
    "10x",
    "Announcement for late 25",
    "A video of apps saving lives",
];

/// A validated list of exactly 25 distinct, non-blank terms.
///
/// A catalog can only be constructed through [`TermCatalog::new`] or
/// [`TermCatalog::builtin`], so holding one proves the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCatalog {
    terms: Vec<String>,
}

impl TermCatalog {
    /// Returns the compiled-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in terms are not 25 distinct non-blank strings.
    /// That is a build defect, not a runtime condition.
    #[instrument]
    pub fn builtin() -> Self {
        match Self::new(BUILTIN_TERMS) {
            Ok(catalog) => catalog,
            Err(e) => panic!("Built-in term catalog is invalid: {}", e),
        }
    }

    /// Validates and wraps a custom list of terms.
    #[instrument(skip(terms))]
    pub fn new<I, S>(terms: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        Self::check(&terms)?;
        debug!(count = terms.len(), "Term catalog validated");
        Ok(Self { terms })
    }

    /// Checks the catalog invariant on raw terms.
    pub fn check(terms: &[String]) -> Result<(), CatalogError> {
        if terms.len() != CELL_COUNT {
            return Err(CatalogError::WrongCount {
                expected: CELL_COUNT,
                found: terms.len(),
            });
        }

        let mut seen = HashSet::with_capacity(CELL_COUNT);
        for (index, term) in terms.iter().enumerate() {
            if term.trim().is_empty() {
                return Err(CatalogError::BlankTerm(index));
            }
            if !seen.insert(term.as_str()) {
                return Err(CatalogError::DuplicateTerm(term.clone()));
            }
        }

        Ok(())
    }

    /// Returns true iff the catalog holds 25 distinct non-blank terms.
    pub fn validate(&self) -> bool {
        Self::check(&self.terms).is_ok()
    }

    /// All terms in catalog order.
    pub fn all_terms(&self) -> &[String] {
        &self.terms
    }

    /// Term at the given catalog index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Number of terms (always 25).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false; a valid catalog is never empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Checks whether a term belongs to this catalog.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }
}

impl Default for TermCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Term {}", i)).collect()
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = TermCatalog::builtin();
        assert!(catalog.validate());
        assert_eq!(catalog.len(), CELL_COUNT);
        assert_eq!(catalog.term(0), Some("One more thing"));
        assert_eq!(catalog.term(25), None);
    }

    #[test]
    fn test_custom_catalog_accepted() {
        let catalog = TermCatalog::new(numbered(25)).unwrap();
        assert!(catalog.contains("Term 24"));
        assert!(!catalog.contains("Term 25"));
    }

    #[test]
    fn test_wrong_count_rejected() {
        assert_eq!(
            TermCatalog::new(numbered(24)),
            Err(CatalogError::WrongCount {
                expected: 25,
                found: 24
            })
        );
        assert!(TermCatalog::new(numbered(26)).is_err());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut terms = numbered(25);
        terms[7] = "Term 3".to_string();
        assert_eq!(
            TermCatalog::new(terms),
            Err(CatalogError::DuplicateTerm("Term 3".to_string()))
        );
    }

    #[test]
    fn test_blank_rejected() {
        let mut terms = numbered(25);
        terms[4] = "   ".to_string();
        assert_eq!(TermCatalog::new(terms), Err(CatalogError::BlankTerm(4)));
    }
}
