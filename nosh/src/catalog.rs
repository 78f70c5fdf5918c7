//! The compiled-in Savora menu catalog.
//!
//! The catalog is fixed for the lifetime of the process: a small static
//! table defines the items, and `Catalog` validates and serves them in
//! their original order. No persistence, no runtime mutation.

use crate::interface::{Category, MenuItem, MenuSection, NoshError};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Card shadow the frontend sets once at mount (`--card-shadow`).
pub const CARD_SHADOW: &str = "0 6px 18px rgba(20,20,20,0.06)";

/// Nav chip order, `All` first
pub const SECTION_ORDER: &[MenuSection] = &[
    MenuSection::All,
    MenuSection::Breakfast,
    MenuSection::Lunch,
    MenuSection::Dinner,
    MenuSection::Combos,
];

/// Static source row for the built-in menu
struct CatalogRow {
    id: &'static str,
    name: &'static str,
    price: f64,
    image: &'static str,
    category: Category,
    recommended: bool,
    tag: Option<&'static str>,
}

const ROWS: &[CatalogRow] = &[
    CatalogRow { id: "b1", name: "Pancake Stack", price: 6.5, image: "menu", category: Category::Breakfast, recommended: true, tag: Some("Easy") },
    CatalogRow { id: "b2", name: "Breakfast Burrito", price: 7.0, image: "menu", category: Category::Breakfast, recommended: false, tag: Some("Protein") },
    CatalogRow { id: "l1", name: "Classic Burger", price: 8.5, image: "menu", category: Category::Lunch, recommended: true, tag: Some("Popular") },
    CatalogRow { id: "l2", name: "Caesar Salad", price: 7.5, image: "menu", category: Category::Lunch, recommended: false, tag: Some("Light") },
    CatalogRow { id: "d1", name: "Steak Dinner", price: 16.5, image: "special", category: Category::Dinner, recommended: true, tag: Some("Chef’s") },
    CatalogRow { id: "d2", name: "Grilled Salmon", price: 14.0, image: "special", category: Category::Dinner, recommended: false, tag: Some("Healthy") },
    CatalogRow { id: "c1", name: "Best Combo Meal", price: 12.0, image: "combos", category: Category::Combos, recommended: false, tag: Some("Value") },
    CatalogRow { id: "c2", name: "Family Combo", price: 20.0, image: "combos", category: Category::Combos, recommended: false, tag: Some("Share") },
    CatalogRow { id: "f1", name: "Customer Favourite", price: 9.0, image: "favourite", category: Category::Lunch, recommended: false, tag: Some("Top") },
];

/// An ordered, validated set of menu items
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from items, preserving their order.
    /// Rejects empty ids, duplicate ids, and prices that are negative
    /// or non-finite.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, NoshError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for item in &items {
            if item.id.is_empty() {
                return Err(NoshError::InvalidCatalog(format!(
                    "item {:?} has an empty id",
                    item.name
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(NoshError::InvalidCatalog(format!(
                    "duplicate item id {:?}",
                    item.id
                )));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(NoshError::InvalidCatalog(format!(
                    "item {:?} has invalid price {}",
                    item.id, item.price
                )));
            }
        }
        Ok(Self { items })
    }

    /// All items in original catalog order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The built-in Savora menu
pub static MENU: Lazy<Catalog> = Lazy::new(|| {
    let items = ROWS
        .iter()
        .map(|row| MenuItem {
            id: row.id.to_string(),
            name: row.name.to_string(),
            price: row.price,
            category: row.category,
            recommended: row.recommended,
            tag: row.tag.map(str::to_string),
            image: row.image.to_string(),
        })
        .collect();
    Catalog::new(items).expect("built-in menu is valid")
});

/// The built-in menu as a plain list, for frontends that render it directly
#[uniffi::export]
pub fn builtin_menu() -> Vec<MenuItem> {
    MENU.items().to_vec()
}

/// Nav chip order for the section bar
#[uniffi::export]
pub fn section_order() -> Vec<MenuSection> {
    SECTION_ORDER.to_vec()
}

/// Card shadow value for the one-time mount side effect
#[uniffi::export]
pub fn card_shadow() -> String {
    CARD_SHADOW.to_string()
}

/// Friendly default section for a local hour of day (0–23):
/// breakfast before 11, lunch before 16, dinner before 22, combos after.
#[uniffi::export]
pub fn default_section_for_hour(hour: u32) -> MenuSection {
    if hour < 11 {
        MenuSection::Breakfast
    } else if hour < 16 {
        MenuSection::Lunch
    } else if hour < 22 {
        MenuSection::Dinner
    } else {
        MenuSection::Combos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_menu_is_valid_and_ordered() {
        let menu = &*MENU;
        assert_eq!(menu.len(), 9);
        // Original relative order is the declaration order
        let ids: Vec<&str> = menu.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2", "l1", "l2", "d1", "d2", "c1", "c2", "f1"]);
    }

    #[test]
    fn test_lookup_by_id() {
        let burger = MENU.get("l1").expect("l1 exists");
        assert_eq!(burger.name, "Classic Burger");
        assert_eq!(burger.price, 8.5);
        assert!(burger.recommended);
        assert_eq!(burger.tag.as_deref(), Some("Popular"));
        assert!(MENU.get("nope").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let item = MENU.get("b1").unwrap().clone();
        let err = Catalog::new(vec![item.clone(), item]).unwrap_err();
        assert!(matches!(err, NoshError::InvalidCatalog(_)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut item = MENU.get("b1").unwrap().clone();
        item.price = -1.0;
        assert!(Catalog::new(vec![item]).is_err());
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut item = MENU.get("b1").unwrap().clone();
        item.id = String::new();
        assert!(Catalog::new(vec![item]).is_err());
    }

    #[test]
    fn test_default_section_for_hour() {
        assert_eq!(default_section_for_hour(0), MenuSection::Breakfast);
        assert_eq!(default_section_for_hour(10), MenuSection::Breakfast);
        assert_eq!(default_section_for_hour(11), MenuSection::Lunch);
        assert_eq!(default_section_for_hour(15), MenuSection::Lunch);
        assert_eq!(default_section_for_hour(16), MenuSection::Dinner);
        assert_eq!(default_section_for_hour(21), MenuSection::Dinner);
        assert_eq!(default_section_for_hour(22), MenuSection::Combos);
        assert_eq!(default_section_for_hour(23), MenuSection::Combos);
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(MenuSection::All.label(), "Browse All");
        assert_eq!(MenuSection::Breakfast.label(), "Morning Fuel");
        assert_eq!(MenuSection::Combos.label(), "Power Combos");
        assert_eq!(Category::Lunch.label(), "Lunch");
    }
}
