//! Navbar shadow that deepens once the page is scrolled.
//!
//! Recomputed from the scroll offset on every scroll event: past the
//! threshold the navbar gets the pronounced shadow, otherwise the subtle one.

use crate::event::{Event, EventKind};
use crate::page::PageContext;
use crate::style::BoxShadow;

use super::Behavior;

pub const NAVBAR_CLASS: &str = "navbar";

#[derive(Debug, Default)]
pub struct NavbarShadow {
    updates: u64,
}

impl NavbarShadow {
    /// The shadow for a given scroll offset.
    pub fn shadow_for(scroll_y: i32, threshold: i32) -> BoxShadow {
        if scroll_y > threshold {
            BoxShadow::PRONOUNCED
        } else {
            BoxShadow::SUBTLE
        }
    }

    /// How many scroll events restyled the navbar.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Behavior for NavbarShadow {
    fn name(&self) -> &'static str {
        "navbar-shadow"
    }

    fn attach(&mut self, _ctx: &mut PageContext<'_>) {}

    fn handle(&mut self, event: &mut Event, ctx: &mut PageContext<'_>) {
        if event.kind != EventKind::Scroll {
            return;
        }
        // Looked up per event, so a navbar is optional.
        let Some(navbar) = ctx.dom.query_by_class(NAVBAR_CLASS).first().copied() else {
            tracing::trace!("no navbar to restyle");
            return;
        };
        let shadow = Self::shadow_for(ctx.viewport.scroll_y(), ctx.config.shadow_threshold);
        if let Some(data) = ctx.dom.get_mut(navbar) {
            data.style.box_shadow = Some(shadow);
            self.updates += 1;
        }
    }
}
