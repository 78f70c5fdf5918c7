//! Savora Menu Core - Rust business logic for the Savora menu assistant
//!
//! This library implements the menu browsing, selection, confirmation,
//! and chat-wizard logic behind the Savora UI. All data is an in-memory
//! compiled-in catalog; derived views (visible items, suggestions,
//! totals) are pure functions over it.
//!
//! Types are exported via UniFFI proc-macros (#[derive(uniffi::Record/Enum)]).

pub mod catalog;
pub mod filter;
pub mod interface;
pub mod selection;
pub mod store;
pub mod suggest;
pub mod summary;
pub mod wizard;

pub use interface::*;
pub use store::MenuStore;
pub use summary::ConfirmDialog;
pub use wizard::ChatWizard;

uniffi::setup_scaffolding!("nosh");
