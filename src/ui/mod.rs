/// View layer
///
/// Pure projections of the application state into iced widgets:
/// - Record listings with per-row actions (table.rs)
/// - The add/edit form shown inside a modal (form.rs)
/// - The modal overlay itself (modal.rs)

pub mod form;
pub mod modal;
pub mod table;
