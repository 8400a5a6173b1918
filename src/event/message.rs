//! Page events delivered to behaviors.

use crate::dom::node::NodeId;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An element was activated.
    Click,
    /// The window's scroll offset changed.
    Scroll,
}

/// A dispatched event.
///
/// Clicks target the element that was hit and bubble to its ancestors;
/// scroll events target the window (`target` is `None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: Option<NodeId>,
    default_prevented: bool,
}

impl Event {
    pub fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target: Some(target),
            default_prevented: false,
        }
    }

    pub fn scroll() -> Self {
        Self {
            kind: EventKind::Scroll,
            target: None,
            default_prevented: false,
        }
    }

    /// Suppress the browser's default action (e.g. fragment navigation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Dom, NodeData};

    #[test]
    fn click_targets_node() {
        let mut dom = Dom::new();
        let a = dom.insert(NodeData::new("a"));
        let event = Event::click(a);
        assert_eq!(event.kind, EventKind::Click);
        assert_eq!(event.target, Some(a));
        assert!(!event.default_prevented());
    }

    #[test]
    fn scroll_targets_window() {
        let event = Event::scroll();
        assert_eq!(event.kind, EventKind::Scroll);
        assert!(event.target.is_none());
    }

    #[test]
    fn prevent_default_sticks() {
        let mut event = Event::scroll();
        event.prevent_default();
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
