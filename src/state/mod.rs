/// State management module
///
/// This module handles all application state, including:
/// - Record types and their fields (data.rs)
/// - Ordered record collections with stable ids (store.rs)
/// - Form values and presence validation (form.rs)
/// - The add/edit modal state machine (session.rs)
/// - Per-collection event handling (panel.rs)

pub mod data;
pub mod form;
pub mod panel;
pub mod session;
pub mod store;
