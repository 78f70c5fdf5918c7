//! Selection Store — chosen quantities per item id.
//!
//! A plain quantity map with two invariants: an absent key means zero,
//! and quantities never go negative. Ids are not checked against the
//! catalog here; unknown ids simply never join to a line item.

use crate::catalog::Catalog;
use crate::interface::{OrderSummary, SelectionLine};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct SelectionMap {
    counts: HashMap<String, u32>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// quantity[id] += 1, treating absent as 0
    pub fn increment(&mut self, id: &str) {
        *self.counts.entry(id.to_string()).or_insert(0) += 1;
    }

    /// quantity[id] = max(0, quantity[id] - 1)
    pub fn decrement(&mut self, id: &str) {
        let count = self.counts.entry(id.to_string()).or_insert(0);
        *count = count.saturating_sub(1);
    }

    /// Clear all quantities
    pub fn reset(&mut self) {
        self.counts.clear();
    }

    /// Chosen quantity for `id`; absence is zero
    pub fn quantity(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Items with quantity > 0, joined with catalog data in catalog order
    pub fn selected_lines(&self, catalog: &Catalog) -> Vec<SelectionLine> {
        catalog
            .items()
            .iter()
            .filter_map(|item| {
                let quantity = self.quantity(&item.id);
                (quantity > 0).then(|| SelectionLine {
                    item: item.clone(),
                    quantity,
                    line_total: f64::from(quantity) * item.price,
                })
            })
            .collect()
    }

    /// Sum of quantity × price over selected items, unrounded
    pub fn total(&self, catalog: &Catalog) -> f64 {
        self.selected_lines(catalog)
            .iter()
            .map(|line| line.line_total)
            .sum()
    }

    /// Lines and total in one pass, for the summary view
    pub fn summary(&self, catalog: &Catalog) -> OrderSummary {
        let lines = self.selected_lines(catalog);
        let total = lines.iter().map(|line| line.line_total).sum();
        OrderSummary { lines, total }
    }
}
