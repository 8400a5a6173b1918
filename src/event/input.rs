//! User input fed to a page: clicks, scrolling, window resizes.

use crate::dom::node::NodeId;

/// One piece of user input, as delivered to [`Page::run`](crate::page::Page::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageInput {
    /// Activate an element (mouse click or keyboard activation).
    Click(NodeId),
    /// Activate the first element matching a selector.
    ClickSelector(String),
    /// Scroll the window to an absolute vertical offset.
    ScrollTo(i32),
    /// Scroll the window by a relative amount (wheel, keyboard).
    ScrollBy(i32),
    /// The window's inner height changed.
    Resize { height: i32 },
}
