//! The UI behavior controller and its three behaviors.
//!
//! [`UiController`] is built once when the page loads. Each behavior
//! registers against the markup in [`Behavior::attach`] and then reacts to
//! dispatched events in [`Behavior::handle`]. Behaviors are independent;
//! each sees every event.

pub mod anchor;
pub mod filter;
pub mod navbar;

use std::fmt;

pub use anchor::SmoothAnchors;
pub use filter::{Filter, RecipeFilter};
pub use navbar::NavbarShadow;

use crate::event::Event;
use crate::page::PageContext;

/// A reactive page behavior.
pub trait Behavior: fmt::Debug + Send {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Register against the loaded document.
    fn attach(&mut self, ctx: &mut PageContext<'_>);

    /// React to one event. Runs synchronously inside the dispatching turn.
    fn handle(&mut self, event: &mut Event, ctx: &mut PageContext<'_>);
}

/// Owns the page's behaviors for the lifetime of the page.
#[derive(Debug, Default)]
pub struct UiController {
    anchors: SmoothAnchors,
    filter: RecipeFilter,
    navbar: NavbarShadow,
}

impl UiController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors, filter and navbar: the set every page gets.
    pub fn standard() -> Self {
        Self::new()
    }

    pub fn anchors(&self) -> &SmoothAnchors {
        &self.anchors
    }

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }

    pub fn navbar(&self) -> &NavbarShadow {
        &self.navbar
    }

    fn behaviors_mut(&mut self) -> [&mut dyn Behavior; 3] {
        [&mut self.anchors, &mut self.filter, &mut self.navbar]
    }

    /// Attach every behavior, in registration order.
    pub fn attach(&mut self, ctx: &mut PageContext<'_>) {
        for behavior in self.behaviors_mut() {
            tracing::debug!(behavior = behavior.name(), "attaching");
            behavior.attach(ctx);
        }
    }

    /// Deliver one event to every behavior.
    pub fn handle(&mut self, event: &mut Event, ctx: &mut PageContext<'_>) {
        for behavior in self.behaviors_mut() {
            behavior.handle(event, ctx);
        }
    }
}
