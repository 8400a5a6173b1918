//! Pilot: programmatic interaction with a headless Page.
//!
//! The `Pilot` wraps a [`Page`] and provides selector-based methods to
//! simulate user input (clicks, scrolling, resizing), let virtual time pass,
//! and read back what the user would see.

use std::time::Duration;

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::{Event, PageInput};
use crate::page::{Page, PageConfig};
use crate::selector::SelectorError;
use crate::style::BoxShadow;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless page driver for testing.
///
/// # Examples
///
/// ```ignore
/// use recipe_page::testing::Pilot;
///
/// let mut pilot = Pilot::new(dom);
/// pilot.click(r#".filter-btn[data-filter="mains"]"#)?;
/// pilot.settle();
/// assert_eq!(pilot.visible_categories(), ["mains", "mains"]);
/// ```
#[derive(Debug)]
pub struct Pilot {
    page: Page,
}

impl Pilot {
    /// Load `dom` with the default configuration.
    pub fn new(dom: Dom) -> Self {
        Self::with_config(dom, PageConfig::default())
    }

    pub fn with_config(dom: Dom, config: PageConfig) -> Self {
        Self {
            page: Page::load(dom, config),
        }
    }

    pub fn from_page(page: Page) -> Self {
        Self { page }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Click the first element matching `selector`.
    ///
    /// Returns the dispatched event, or `None` if nothing matched.
    pub fn click(&mut self, selector: &str) -> Result<Option<Event>, SelectorError> {
        self.page.click_selector(selector)
    }

    /// Click a specific node.
    pub fn click_node(&mut self, node: NodeId) -> Event {
        self.page.click(node)
    }

    pub fn scroll_to(&mut self, y: i32) -> bool {
        self.page.scroll_to(y)
    }

    pub fn scroll_by(&mut self, dy: i32) -> bool {
        self.page.scroll_by(dy)
    }

    pub fn resize(&mut self, height: i32) {
        self.page.resize(height);
    }

    /// Apply a batch of inputs in order.
    pub fn replay(&mut self, inputs: impl IntoIterator<Item = PageInput>) {
        for input in inputs {
            self.page.apply(input);
        }
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Let `duration` of virtual time pass.
    pub fn wait(&mut self, duration: Duration) {
        self.page.advance(duration);
    }

    /// Fire every pending task: fades complete and smooth scrolls land.
    pub fn settle(&mut self) {
        self.page.run_until_idle();
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn into_page(self) -> Page {
        self.page
    }

    pub fn scroll_y(&self) -> i32 {
        self.page.viewport().scroll_y()
    }

    /// Registered recipe cards not hidden by `display: none`.
    pub fn visible_cards(&self) -> Vec<NodeId> {
        let dom = self.page.dom();
        self.page
            .controller()
            .filter()
            .cards()
            .iter()
            .copied()
            .filter(|&card| dom.get(card).is_some_and(|data| data.is_displayed()))
            .collect()
    }

    /// `data-category` of each visible card, in document order.
    pub fn visible_categories(&self) -> Vec<String> {
        let dom = self.page.dom();
        self.visible_cards()
            .into_iter()
            .filter_map(|card| dom.get(card)?.attr("data-category").map(|c| c.into_owned()))
            .collect()
    }

    /// The active filter value (`all` for the wildcard).
    pub fn active_filter(&self) -> Option<String> {
        self.page
            .controller()
            .filter()
            .active()
            .map(ToString::to_string)
    }

    /// Inline shadow on the first `.navbar`.
    pub fn navbar_shadow(&self) -> Option<BoxShadow> {
        let dom = self.page.dom();
        dom.query_by_class("navbar")
            .first()
            .and_then(|&nav| dom.get(nav)?.style.box_shadow)
    }

    /// Outline of the current document.
    pub fn outline(&self) -> String {
        super::snapshot::outline(self.page.dom())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
