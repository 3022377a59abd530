/// UI widgets
///
/// Pure view builders: each function takes the relevant state and
/// returns an Element. All interaction flows back through
/// crate::Message:
/// - Menu bar with Open / About / Exit (menubar.rs)
/// - Collapsible Nodes / Messages tree (sidebar.rs)
/// - Node and signal detail tables (table.rs)
/// - About page (about.rs)

pub mod about;
pub mod menubar;
pub mod sidebar;
pub mod table;
