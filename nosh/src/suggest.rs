//! Suggestion Engine — bounded recommended-item picks for a section.
//!
//! Deterministic and pure: a function of (catalog, section) only. There
//! is no scoring, learning, or randomness behind the "smart" suggestions;
//! the recommended flag is static catalog data.

use crate::catalog::Catalog;
use crate::interface::{MenuItem, MenuSection};

/// Upper bound on the suggestion strip
pub const MAX_SUGGESTIONS: usize = 6;

/// Up to [`MAX_SUGGESTIONS`] recommended items in the current section.
/// Falls back to globally recommended items only when the section has
/// no recommended item at all.
pub fn suggestions(catalog: &Catalog, section: MenuSection) -> Vec<MenuItem> {
    let in_section: Vec<MenuItem> = catalog
        .items()
        .iter()
        .filter(|item| item.recommended && section.matches(item.category))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect();
    if !in_section.is_empty() {
        return in_section;
    }

    catalog
        .items()
        .iter()
        .filter(|item| item.recommended)
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
