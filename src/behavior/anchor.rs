//! Smooth scrolling for in-page links.
//!
//! Every `a[href^="#"]` present at load has its click intercepted: the
//! default fragment jump is suppressed and the href is resolved as a
//! selector. A match is scrolled into view smoothly, aligned to the top.
//! No match, or an href that is not a valid selector (`#`, `#1`), does
//! nothing.

use crate::dom::node::NodeId;
use crate::event::{Event, EventDispatcher, EventKind};
use crate::page::PageContext;
use crate::selector::parse_selector_list;
use crate::viewport::ScrollIntoViewOptions;

use super::Behavior;

/// Selector for the links this behavior takes over.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

#[derive(Debug, Default)]
pub struct SmoothAnchors {
    anchors: Vec<NodeId>,
}

impl SmoothAnchors {
    /// Links registered at load, in document order.
    pub fn anchors(&self) -> &[NodeId] {
        &self.anchors
    }

    fn on_click(&self, event: &mut Event, ctx: &mut PageContext<'_>) {
        let Some(target) = event.target else { return };
        let Some(anchor) = EventDispatcher::bubble_path(ctx.dom, target)
            .into_iter()
            .find(|node| self.anchors.contains(node))
        else {
            return;
        };

        event.prevent_default();

        let Some(href) = ctx
            .dom
            .get(anchor)
            .and_then(|data| data.attr("href"))
            .map(|href| href.into_owned())
        else {
            return;
        };

        match ctx.dom.query_selector(&href) {
            Ok(Some(destination)) => {
                let outcome = ctx.scroll_into_view(destination, ScrollIntoViewOptions::smooth_start());
                tracing::debug!(%href, ?outcome, "scrolling to anchor target");
            }
            Ok(None) => tracing::debug!(%href, "anchor target not found"),
            Err(err) => tracing::debug!(%href, %err, "anchor href is not a selector"),
        }
    }
}

impl Behavior for SmoothAnchors {
    fn name(&self) -> &'static str {
        "smooth-anchors"
    }

    fn attach(&mut self, ctx: &mut PageContext<'_>) {
        match parse_selector_list(ANCHOR_SELECTOR) {
            Ok(list) => self.anchors = ctx.dom.select(&list),
            Err(err) => tracing::warn!(%err, "anchor selector rejected"),
        }
        tracing::debug!(count = self.anchors.len(), "in-page links registered");
    }

    fn handle(&mut self, event: &mut Event, ctx: &mut PageContext<'_>) {
        if event.kind == EventKind::Click {
            self.on_click(event, ctx);
        }
    }
}
