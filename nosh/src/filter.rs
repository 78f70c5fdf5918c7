//! View Filter — derives the visible item subset from the filter criteria.
//!
//! Pure function over (catalog, criteria); no caching, no invalidation.
//! Section, query, and recommended-only are ANDed together, and the
//! catalog's original relative order is preserved.

use crate::catalog::Catalog;
use crate::interface::{FilterCriteria, MenuItem};

/// Items matching the criteria, in catalog order.
/// An empty query matches everything; the name match is a
/// case-insensitive substring test.
pub fn visible_items(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<MenuItem> {
    let query = criteria.query.to_lowercase();
    catalog
        .items()
        .iter()
        .filter(|item| criteria.section.matches(item.category))
        .filter(|item| item.name.to_lowercase().contains(&query))
        .filter(|item| !criteria.recommended_only || item.recommended)
        .cloned()
        .collect()
}
