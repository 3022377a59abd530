/// State management module
///
/// This module holds the small amount of state the viewer keeps between
/// events:
/// - Sidebar selection and screen switching (selection.rs)
///
/// The loaded document itself lives in dbc::model and is replaced
/// wholesale on every re-open; nothing is persisted.

pub mod selection;
