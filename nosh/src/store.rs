//! MenuStore — main API for the UI shell.
//!
//! Owns the catalog, the selection map, and the filter criteria, and
//! derives everything else on demand through the pure filter and
//! suggestion functions. All operations are synchronous; each piece of
//! state has exactly one writer (the interaction handler that calls in).

use crate::catalog::{Catalog, MENU};
use crate::filter;
use crate::interface::{
    FilterCriteria, MenuItem, MenuSection, MenuStoreApi, NoshError, OrderReceipt, OrderSummary,
};
use crate::selection::SelectionMap;
use crate::suggest;
use parking_lot::Mutex;

/// In-memory menu browsing and ordering state.
/// Nothing survives the store: no persistence, no network, no backend.
#[derive(uniffi::Object)]
pub struct MenuStore {
    catalog: Catalog,
    selection: Mutex<SelectionMap>,
    criteria: Mutex<FilterCriteria>,
}

#[uniffi::export]
impl MenuStore {
    /// A store over the built-in Savora menu, with permissive criteria
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self {
            catalog: MENU.clone(),
            selection: Mutex::new(SelectionMap::new()),
            criteria: Mutex::new(FilterCriteria::default()),
        }
    }

    /// A store over a caller-supplied catalog, validated up front
    #[uniffi::constructor]
    pub fn with_items(items: Vec<MenuItem>) -> Result<Self, NoshError> {
        Ok(Self {
            catalog: Catalog::new(items)?,
            selection: Mutex::new(SelectionMap::new()),
            criteria: Mutex::new(FilterCriteria::default()),
        })
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

#[uniffi::export]
impl MenuStoreApi for MenuStore {
    // ─────────────────────────────────────────────────────────────────────────────
    // Browsing
    // ─────────────────────────────────────────────────────────────────────────────

    fn visible_items(&self) -> Vec<MenuItem> {
        filter::visible_items(&self.catalog, &self.criteria.lock())
    }

    fn suggestions(&self) -> Vec<MenuItem> {
        suggest::suggestions(&self.catalog, self.criteria.lock().section)
    }

    fn criteria(&self) -> FilterCriteria {
        self.criteria.lock().clone()
    }

    fn set_section(&self, section: MenuSection) {
        self.criteria.lock().section = section;
    }

    fn set_query(&self, query: String) {
        self.criteria.lock().query = query;
    }

    fn set_recommended_only(&self, recommended_only: bool) {
        self.criteria.lock().recommended_only = recommended_only;
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────────

    fn increment(&self, item_id: String) {
        self.selection.lock().increment(&item_id);
    }

    fn decrement(&self, item_id: String) {
        self.selection.lock().decrement(&item_id);
    }

    fn reset(&self) {
        self.selection.lock().reset();
    }

    fn quantity(&self, item_id: String) -> u32 {
        self.selection.lock().quantity(&item_id)
    }

    fn selection(&self) -> OrderSummary {
        self.selection.lock().summary(&self.catalog)
    }

    /// Log the selection, clear it, and return the receipt.
    /// There is no fulfillment behind this: the log line is the entire
    /// external effect, and the acknowledgment dialog lives in the
    /// frontend.
    fn confirm_order(&self) -> OrderReceipt {
        let mut selection = self.selection.lock();
        let OrderSummary { lines, total } = selection.summary(&self.catalog);

        let receipt = OrderReceipt {
            message: format!("Selected {} item(s).", lines.len()),
            lines,
            total,
        };

        let payload = serde_json::to_string(&receipt.lines).unwrap_or_default();
        tracing::info!(selection = %payload, total = receipt.total, "customer selection confirmed");

        selection.reset();
        receipt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::Category;

    #[test]
    fn test_new_store_shows_whole_menu() {
        let store = MenuStore::new();
        assert_eq!(store.criteria(), FilterCriteria::default());
        assert_eq!(store.visible_items().len(), 9);
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_criteria_setters_drive_visible_items() {
        let store = MenuStore::new();
        store.set_section(MenuSection::Dinner);
        let ids: Vec<String> = store.visible_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["d1", "d2"]);

        store.set_query("salmon".to_string());
        let ids: Vec<String> = store.visible_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["d2"]);

        store.set_recommended_only(true);
        assert!(store.visible_items().is_empty());
    }

    #[test]
    fn test_suggestions_follow_section() {
        let store = MenuStore::new();
        store.set_section(MenuSection::Breakfast);
        let ids: Vec<String> = store.suggestions().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["b1"]);

        // combos falls back to global recommended
        store.set_section(MenuSection::Combos);
        let ids: Vec<String> = store.suggestions().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["b1", "l1", "d1"]);
    }

    #[test]
    fn test_selection_round_trip() {
        let store = MenuStore::new();
        store.increment("l1".to_string());
        store.increment("l1".to_string());
        store.increment("l2".to_string());
        store.decrement("l2".to_string());
        store.decrement("l2".to_string());

        assert_eq!(store.quantity("l1".to_string()), 2);
        assert_eq!(store.quantity("l2".to_string()), 0);

        let summary = store.selection();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total, 17.0);
    }

    #[test]
    fn test_confirm_order_returns_receipt_and_clears() {
        let store = MenuStore::new();
        store.increment("l1".to_string());
        store.increment("l1".to_string());
        store.increment("l2".to_string());

        let receipt = store.confirm_order();
        assert_eq!(receipt.message, "Selected 2 item(s).");
        assert_eq!(receipt.total, 24.5);
        assert_eq!(receipt.lines.len(), 2);

        // confirm clears the selection wholesale
        assert!(store.selection().is_empty());
        assert_eq!(store.quantity("l1".to_string()), 0);
    }

    #[test]
    fn test_confirm_with_empty_selection() {
        let store = MenuStore::new();
        let receipt = store.confirm_order();
        assert_eq!(receipt.message, "Selected 0 item(s).");
        assert_eq!(receipt.total, 0.0);
        assert!(receipt.lines.is_empty());
    }

    #[test]
    fn test_with_items_validates() {
        let items = vec![MenuItem {
            id: "x1".to_string(),
            name: "Test Dish".to_string(),
            price: 4.0,
            category: Category::Lunch,
            recommended: true,
            tag: None,
            image: "menu".to_string(),
        }];
        let store = MenuStore::with_items(items.clone()).unwrap();
        assert_eq!(store.visible_items().len(), 1);

        let dup = MenuStore::with_items(vec![items[0].clone(), items[0].clone()]);
        assert!(matches!(dup, Err(NoshError::InvalidCatalog(_))));
    }

    #[test]
    fn test_receipt_lines_serialize_for_the_log() {
        let store = MenuStore::new();
        store.increment("b1".to_string());
        let receipt = store.confirm_order();
        let payload = serde_json::to_string(&receipt.lines).unwrap();
        assert!(payload.contains("\"Pancake Stack\""));
        assert!(payload.contains("\"breakfast\""));
    }
}
