//! Event dispatch: pending event queue and bubble path computation.
//!
//! [`EventDispatcher`] queues [`Event`]s raised while another event is being
//! handled (a click that scrolls raises a scroll event). The page drains the
//! queue before returning to the caller, so every handler runs inside the
//! turn that caused it.

use std::collections::VecDeque;

use super::message::Event;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;

// ---------------------------------------------------------------------------
// EventDispatcher
// ---------------------------------------------------------------------------

/// FIFO queue of events waiting to be dispatched.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    queue: VecDeque<Event>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event for dispatch later in the current turn.
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Take the oldest pending event.
    pub fn pop(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Compute the bubble path from `start` up to the root (inclusive).
    ///
    /// Returns `[start, parent, grandparent, ..., root]`, or an empty vec if
    /// `start` is not in the document.
    pub fn bubble_path(dom: &Dom, start: NodeId) -> Vec<NodeId> {
        if !dom.contains(start) {
            return Vec::new();
        }
        let mut path = vec![start];
        path.extend(dom.ancestors(start));
        path
    }
}

// ===========================================================================
// Tests
// ===========================================================================
