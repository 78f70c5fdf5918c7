//! Savora FFI Interface Definition
//!
//! This file defines the public interface exposed to the UI shell via UniFFI.
//! It acts as the source of truth for shared types.

use serde::Serialize;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Menu category an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Combos,
}

impl Category {
    /// Capitalized category name as shown on item cards
    pub fn label(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Combos => "Combos",
        }
    }
}

/// Section chip in the nav bar: one fixed category, or everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MenuSection {
    All,
    Breakfast,
    Lunch,
    Dinner,
    Combos,
}

impl MenuSection {
    /// Whether an item of `category` is visible under this section
    pub fn matches(&self, category: Category) -> bool {
        match self.category() {
            None => true,
            Some(c) => c == category,
        }
    }

    /// The concrete category behind this section, if any
    pub fn category(&self) -> Option<Category> {
        match self {
            MenuSection::All => None,
            MenuSection::Breakfast => Some(Category::Breakfast),
            MenuSection::Lunch => Some(Category::Lunch),
            MenuSection::Dinner => Some(Category::Dinner),
            MenuSection::Combos => Some(Category::Combos),
        }
    }

    /// Friendly chip label for the nav bar
    pub fn label(&self) -> &'static str {
        match self {
            MenuSection::All => "Browse All",
            MenuSection::Breakfast => "Morning Fuel",
            MenuSection::Lunch => "Midday Meals",
            MenuSection::Dinner => "Evening Feast",
            MenuSection::Combos => "Power Combos",
        }
    }
}

impl From<Category> for MenuSection {
    fn from(category: Category) -> Self {
        match category {
            Category::Breakfast => MenuSection::Breakfast,
            Category::Lunch => MenuSection::Lunch,
            Category::Dinner => MenuSection::Dinner,
            Category::Combos => MenuSection::Combos,
        }
    }
}

/// Result of tapping an option in the chat wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum WizardTransition {
    /// Answer recorded, moved on to the question at `step`
    Advanced { step: u32 },
    /// Answer recorded at the last question; wizard closed and cleared
    Completed,
    /// Tap arrived while the wizard was closed; nothing happened
    Ignored,
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// A single orderable menu item. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, uniffi::Record)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub recommended: bool,
    pub tag: Option<String>,
    /// Asset name the frontend resolves to an image
    pub image: String,
}

impl MenuItem {
    /// Price formatted for display, e.g. "$8.50"
    pub fn price_label(&self) -> String {
        crate::summary::format_price(self.price)
    }
}

/// What the browsing view is currently filtering on.
/// All fields default to their permissive value: every item visible.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FilterCriteria {
    pub section: MenuSection,
    pub query: String,
    pub recommended_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            section: MenuSection::All,
            query: String::new(),
            recommended_only: false,
        }
    }
}

/// One selected item joined with its chosen quantity
#[derive(Debug, Clone, PartialEq, Serialize, uniffi::Record)]
pub struct SelectionLine {
    pub item: MenuItem,
    pub quantity: u32,
    /// quantity × unit price, unrounded
    pub line_total: f64,
}

/// The current selection: line items plus the running total
#[derive(Debug, Clone, PartialEq, Serialize, uniffi::Record)]
pub struct OrderSummary {
    pub lines: Vec<SelectionLine>,
    /// Sum of line totals, unrounded. Round only for display.
    pub total: f64,
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total formatted for display, e.g. "$24.50"
    pub fn total_label(&self) -> String {
        crate::summary::format_price(self.total)
    }
}

/// Outcome of confirming an order. The selection is cleared once this
/// is produced; there is no fulfillment behind it.
#[derive(Debug, Clone, PartialEq, Serialize, uniffi::Record)]
pub struct OrderReceipt {
    pub lines: Vec<SelectionLine>,
    pub total: f64,
    /// Human message for the frontend's acknowledgment dialog
    pub message: String,
}

/// Raw dialog input: every field optional, missing numbers count as zero
#[derive(Debug, Clone, Default, PartialEq, uniffi::Record)]
pub struct ConfirmEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub qty: Option<u32>,
    pub price: Option<f64>,
}

/// One rendered dialog row
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct DialogLine {
    /// "Classic Burger x 2" — the quantity suffix is omitted when qty is 0
    pub heading: String,
    /// Formatted qty × price, empty when the entry carried no price
    pub line_total_label: String,
    /// Formatted unit price, empty when the entry carried no price
    pub unit_price_label: String,
}

/// Fully derived dialog body: rows, grand total, and the empty state
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct DialogSummary {
    pub lines: Vec<DialogLine>,
    pub total: f64,
    /// Grand total formatted for display; "$0.00" even when empty
    pub total_label: String,
    /// Present only when there are no entries to render
    pub empty_message: Option<String>,
}

/// One question of the chat wizard with its tappable options
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct WizardPrompt {
    pub question: String,
    pub options: Vec<String>,
}

/// Error type for Savora core operations
#[derive(Debug, Error, uniffi::Error)]
pub enum NoshError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

// ═══════════════════════════════════════════════════════════════════════════════
// SERVICE INTERFACE
// ═══════════════════════════════════════════════════════════════════════════════

/// The primary interface for the menu browsing and ordering surface.
/// This matches the functionality exposed by the `MenuStore` object.
#[uniffi::export(with_foreign)]
pub trait MenuStoreApi: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────────
    // Browsing
    // ─────────────────────────────────────────────────────────────────────────────

    /// Items visible under the current filter criteria, in catalog order
    fn visible_items(&self) -> Vec<MenuItem>;

    /// Up to six recommended items for the current section
    fn suggestions(&self) -> Vec<MenuItem>;

    /// The current filter criteria
    fn criteria(&self) -> FilterCriteria;

    fn set_section(&self, section: MenuSection);

    fn set_query(&self, query: String);

    fn set_recommended_only(&self, recommended_only: bool);

    // ─────────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────────

    /// Add one of `item_id` to the selection
    fn increment(&self, item_id: String);

    /// Remove one of `item_id`, never going below zero
    fn decrement(&self, item_id: String);

    /// Clear the whole selection
    fn reset(&self);

    /// Chosen quantity for `item_id`; absent means zero
    fn quantity(&self, item_id: String) -> u32;

    /// Selected line items joined with the catalog, plus the total
    fn selection(&self) -> OrderSummary;

    /// Log the selection, clear it, and return the receipt
    fn confirm_order(&self) -> OrderReceipt;
}

/// Foreign-implemented callback for the confirmation dialog.
/// Invoked on confirm, before the dialog closes; never on cancel.
#[uniffi::export(with_foreign)]
pub trait ConfirmationDelegate: Send + Sync {
    fn confirmed(&self);
}
