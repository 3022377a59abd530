/// What the sidebar tree currently has selected
///
/// Indices point into the document's sorted node/message rows, so a
/// selection is only valid for the document it was made against. Every
/// (re)load resets it to None.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected (also the result of clicking a group header)
    #[default]
    None,
    /// A node row, by index into Document::nodes
    Node(usize),
    /// A message row, by index into Document::messages
    Message(usize),
}

/// Which top-level view is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// The tree + table browser
    #[default]
    Browser,
    /// The about page
    About,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Selection::default(), Selection::None);
        assert_eq!(Screen::default(), Screen::Browser);
    }
}
