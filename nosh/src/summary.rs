//! Confirmation dialog — summary derivation and confirm/cancel contract.
//!
//! The dialog owns nothing but its own open flag. Entries arrive from the
//! caller with every field optional; missing quantities and prices are
//! coerced to zero rather than surfaced as errors. Confirm invokes the
//! delegate and then closes; cancel only closes.

use crate::interface::{ConfirmEntry, ConfirmationDelegate, DialogLine, DialogSummary};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shown in place of the line list when there is nothing to confirm
pub const EMPTY_MESSAGE: &str = "No items selected.";

const DEFAULT_TITLE: &str = "Confirm";
const DEFAULT_MESSAGE: &str = "Are you sure?";
const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// Format a dollar amount for display, e.g. "$8.50".
/// Display-only: internal arithmetic stays unrounded.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Derive the dialog body from raw entries. Pure; shared by the dialog
/// object and by tests.
pub fn summarize(entries: &[ConfirmEntry]) -> DialogSummary {
    let lines: Vec<DialogLine> = entries
        .iter()
        .map(|entry| {
            let name = entry.name.clone().unwrap_or_default();
            let qty = entry.qty.unwrap_or(0);
            let heading = if qty > 0 {
                format!("{} x {}", name, qty)
            } else {
                name
            };
            let (line_total_label, unit_price_label) = match entry.price {
                Some(price) => (
                    format_price(f64::from(qty) * price),
                    format_price(price),
                ),
                None => (String::new(), String::new()),
            };
            DialogLine {
                heading,
                line_total_label,
                unit_price_label,
            }
        })
        .collect();

    let total: f64 = entries
        .iter()
        .map(|entry| f64::from(entry.qty.unwrap_or(0)) * entry.price.unwrap_or(0.0))
        .sum();

    DialogSummary {
        total_label: format_price(total),
        empty_message: lines.is_empty().then(|| EMPTY_MESSAGE.to_string()),
        lines,
        total,
    }
}

/// The confirmation dialog model behind the UI's modal
#[derive(uniffi::Object)]
pub struct ConfirmDialog {
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    entries: Vec<ConfirmEntry>,
    open: Mutex<bool>,
}

#[uniffi::export]
impl ConfirmDialog {
    /// Create a closed dialog. Any `None` label falls back to its default.
    #[uniffi::constructor]
    pub fn new(
        title: Option<String>,
        message: Option<String>,
        confirm_label: Option<String>,
        cancel_label: Option<String>,
        entries: Vec<ConfirmEntry>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            message: message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            confirm_label: confirm_label.unwrap_or_else(|| DEFAULT_CONFIRM_LABEL.to_string()),
            cancel_label: cancel_label.unwrap_or_else(|| DEFAULT_CANCEL_LABEL.to_string()),
            entries,
            open: Mutex::new(false),
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn message(&self) -> String {
        self.message.clone()
    }

    pub fn confirm_label(&self) -> String {
        self.confirm_label.clone()
    }

    pub fn cancel_label(&self) -> String {
        self.cancel_label.clone()
    }

    /// The confirm button is hidden when its label is explicitly empty
    pub fn confirm_hidden(&self) -> bool {
        self.confirm_label.is_empty()
    }

    /// Rendered line items, grand total, and empty state
    pub fn summary(&self) -> DialogSummary {
        summarize(&self.entries)
    }

    pub fn is_open(&self) -> bool {
        *self.open.lock()
    }

    pub fn set_open(&self, open: bool) {
        *self.open.lock() = open;
    }

    /// Invoke the delegate, then close
    pub fn confirm(&self, delegate: Arc<dyn ConfirmationDelegate>) {
        delegate.confirmed();
        *self.open.lock() = false;
    }

    /// Close without invoking anything
    pub fn cancel(&self) {
        *self.open.lock() = false;
    }
}
