//! Category filtering of recipe cards.
//!
//! The active filter is held here, as an index into the registered buttons,
//! and the `active` class is rewritten from it on every activation. The
//! markup's class list only seeds the initial state.

use std::fmt;

use crate::dom::node::NodeId;
use crate::event::{Event, EventDispatcher, EventKind};
use crate::page::PageContext;
use crate::style::Display;
use crate::timer::Task;

use super::Behavior;

pub const BUTTON_CLASS: &str = "filter-btn";
pub const CARD_CLASS: &str = "recipe-card";
pub const ACTIVE_CLASS: &str = "active";
pub const FILTER_ATTR: &str = "data-filter";
pub const CATEGORY_ATTR: &str = "data-category";

/// The wildcard `data-filter` value.
pub const ALL: &str = "all";

/// What a filter button selects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Every card.
    All,
    /// Cards whose `data-category` equals this value exactly.
    Category(String),
}

impl Filter {
    /// Interpret a `data-filter` value.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Filter::All
        } else {
            Filter::Category(value.to_owned())
        }
    }

    /// Whether a card with this `data-category` is shown.
    pub fn admits(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str(ALL),
            Filter::Category(category) => f.write_str(category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterButton {
    node: NodeId,
    filter: Filter,
}

#[derive(Debug, Default)]
pub struct RecipeFilter {
    buttons: Vec<FilterButton>,
    cards: Vec<NodeId>,
    active: Option<usize>,
}

impl RecipeFilter {
    /// The active filter; `None` only before the first activation when the
    /// markup marked no button active.
    pub fn active(&self) -> Option<&Filter> {
        self.active.map(|idx| &self.buttons[idx].filter)
    }

    pub fn active_button(&self) -> Option<NodeId> {
        self.active.map(|idx| self.buttons[idx].node)
    }

    /// Registered buttons, in document order.
    pub fn buttons(&self) -> impl Iterator<Item = (NodeId, &Filter)> + '_ {
        self.buttons.iter().map(|b| (b.node, &b.filter))
    }

    /// Registered cards, in document order.
    pub fn cards(&self) -> &[NodeId] {
        &self.cards
    }

    /// Activate the button at `idx`: move the active flag to it, then show
    /// the cards its filter admits (with a fade-in) and hide the rest.
    fn activate(&mut self, idx: usize, ctx: &mut PageContext<'_>) {
        self.active = Some(idx);
        self.sync_active_class(ctx);

        let filter = &self.buttons[idx].filter;
        let mut shown = 0usize;
        for &card in &self.cards {
            let Some(data) = ctx.dom.get_mut(card) else { continue };
            if filter.admits(data.attr(CATEGORY_ATTR).as_deref()) {
                data.style.display = Some(Display::Block);
                data.style.set_opacity(0.0);
                ctx.scheduler.schedule(
                    ctx.config.fade_delay,
                    Task::SetOpacity {
                        node: card,
                        opacity: 1.0,
                    },
                );
                shown += 1;
            } else {
                data.style.display = Some(Display::None);
            }
        }
        tracing::debug!(%filter, shown, total = self.cards.len(), "filter applied");
    }

    fn sync_active_class(&self, ctx: &mut PageContext<'_>) {
        for (idx, button) in self.buttons.iter().enumerate() {
            if let Some(data) = ctx.dom.get_mut(button.node) {
                data.toggle_class(ACTIVE_CLASS, self.active == Some(idx));
            }
        }
    }
}

impl Behavior for RecipeFilter {
    fn name(&self) -> &'static str {
        "recipe-filter"
    }

    fn attach(&mut self, ctx: &mut PageContext<'_>) {
        self.buttons.clear();
        for node in ctx.dom.query_by_class(BUTTON_CLASS) {
            let value = ctx
                .dom
                .get(node)
                .and_then(|data| data.attr(FILTER_ATTR))
                .map(|value| value.into_owned());
            match value {
                Some(value) => self.buttons.push(FilterButton {
                    node,
                    filter: Filter::parse(&value),
                }),
                None => tracing::warn!(?node, "filter button without {FILTER_ATTR} skipped"),
            }
        }

        self.cards = ctx.dom.query_by_class(CARD_CLASS);
        for &card in &self.cards {
            if let Some(data) = ctx.dom.get_mut(card) {
                data.style.transition = Some(ctx.config.fade_transition.clone());
            }
        }

        // Seed from markup; if several buttons claim the flag, the first keeps it.
        self.active = self.buttons.iter().position(|b| {
            ctx.dom
                .get(b.node)
                .is_some_and(|data| data.has_class(ACTIVE_CLASS))
        });
        if self.active.is_some() {
            self.sync_active_class(ctx);
        }

        tracing::debug!(
            buttons = self.buttons.len(),
            cards = self.cards.len(),
            active = ?self.active(),
            "recipe filter registered"
        );
    }

    fn handle(&mut self, event: &mut Event, ctx: &mut PageContext<'_>) {
        if event.kind != EventKind::Click {
            return;
        }
        let Some(target) = event.target else { return };
        let hit = EventDispatcher::bubble_path(ctx.dom, target)
            .into_iter()
            .find_map(|node| self.buttons.iter().position(|b| b.node == node));
        if let Some(idx) = hit {
            self.activate(idx, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dom::{Dom, NodeData};
    use crate::page::{Page, PageConfig};
    use crate::style::Transition;

    #[test]
    fn parse_wildcard_and_category() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("mains"), Filter::Category("mains".into()));
        // Case matters, as in the markup.
        assert_eq!(Filter::parse("All"), Filter::Category("All".into()));
    }

    #[test]
    fn admits() {
        assert!(Filter::All.admits(None));
        assert!(Filter::All.admits(Some("mains")));
        let mains = Filter::Category("mains".into());
        assert!(mains.admits(Some("mains")));
        assert!(!mains.admits(Some("starters")));
        assert!(!mains.admits(None));
    }

    #[test]
    fn display_round_trips_value() {
        assert_eq!(Filter::All.to_string(), "all");
        assert_eq!(Filter::Category("desserts".into()).to_string(), "desserts");
    }

    struct Fixture {
        page: Page,
        all: NodeId,
        starters: NodeId,
        mains: NodeId,
        cards: Vec<NodeId>,
    }

    fn fixture(active_in_markup: &[&str]) -> Fixture {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let bar = dom.insert_child(body, NodeData::new("div").with_class("filters"));
        let mut button = |value: &str| {
            let mut data = NodeData::new("button")
                .with_class(BUTTON_CLASS)
                .with_attr(FILTER_ATTR, value);
            if active_in_markup.contains(&value) {
                data.add_class(ACTIVE_CLASS);
            }
            dom.insert_child(bar, data)
        };
        let all = button("all");
        let starters = button("starters");
        let mains = button("mains");
        let grid = dom.insert_child(body, NodeData::new("div").with_class("recipe-grid"));
        let cards = ["starters", "mains", "mains"]
            .into_iter()
            .map(|category| {
                dom.insert_child(
                    grid,
                    NodeData::new("article")
                        .with_class(CARD_CLASS)
                        .with_attr(CATEGORY_ATTR, category),
                )
            })
            .collect();
        Fixture {
            page: Page::load(dom, PageConfig::default()),
            all,
            starters,
            mains,
            cards,
        }
    }

    fn active_buttons(page: &Page) -> Vec<NodeId> {
        page.dom().query_by_class(ACTIVE_CLASS)
    }

    #[test]
    fn attach_sets_card_transition() {
        let fx = fixture(&["all"]);
        for &card in &fx.cards {
            assert_eq!(
                fx.page.dom().get(card).unwrap().style.transition,
                Some(Transition::opacity_fade())
            );
        }
    }

    #[test]
    fn attach_seeds_active_from_markup() {
        let fx = fixture(&["all"]);
        assert_eq!(fx.page.controller().filter().active(), Some(&Filter::All));
        assert_eq!(fx.page.controller().filter().active_button(), Some(fx.all));
    }

    #[test]
    fn attach_keeps_only_first_of_several_active() {
        let fx = fixture(&["starters", "mains"]);
        assert_eq!(active_buttons(&fx.page), vec![fx.starters]);
    }

    #[test]
    fn attach_with_no_active_button() {
        let fx = fixture(&[]);
        assert!(fx.page.controller().filter().active().is_none());
        assert!(active_buttons(&fx.page).is_empty());
    }

    #[test]
    fn category_click_hides_other_cards() {
        let mut fx = fixture(&["all"]);
        fx.page.click(fx.mains);

        let displays: Vec<_> = fx
            .cards
            .iter()
            .map(|&c| fx.page.dom().get(c).unwrap().style.display)
            .collect();
        assert_eq!(
            displays,
            vec![Some(Display::None), Some(Display::Block), Some(Display::Block)]
        );
        assert_eq!(active_buttons(&fx.page), vec![fx.mains]);
        assert_eq!(
            fx.page.controller().filter().active(),
            Some(&Filter::Category("mains".into()))
        );
    }

    #[test]
    fn shown_cards_fade_in_after_delay() {
        let mut fx = fixture(&["all"]);
        fx.page.click(fx.mains);
        let shown = fx.cards[1];
        assert_eq!(fx.page.dom().get(shown).unwrap().style.opacity, Some(0.0));

        fx.page.advance(Duration::from_millis(9));
        assert_eq!(fx.page.dom().get(shown).unwrap().style.opacity, Some(0.0));

        fx.page.advance(Duration::from_millis(1));
        assert_eq!(fx.page.dom().get(shown).unwrap().style.opacity, Some(1.0));
        // Hidden cards are not faded, only removed from layout.
        assert_eq!(fx.page.dom().get(fx.cards[0]).unwrap().style.opacity, None);
    }

    #[test]
    fn all_shows_every_card() {
        let mut fx = fixture(&["all"]);
        fx.page.click(fx.starters);
        fx.page.click(fx.all);
        fx.page.run_until_idle();
        for &card in &fx.cards {
            let style = &fx.page.dom().get(card).unwrap().style;
            assert_eq!(style.display, Some(Display::Block));
            assert_eq!(style.opacity, Some(1.0));
        }
        assert_eq!(active_buttons(&fx.page), vec![fx.all]);
    }

    #[test]
    fn clicking_active_button_again_is_idempotent() {
        let mut fx = fixture(&["all"]);
        fx.page.click(fx.mains);
        fx.page.run_until_idle();
        let before = fx.page.dom().clone();

        fx.page.click(fx.mains);
        fx.page.click(fx.mains);
        fx.page.run_until_idle();

        for &card in &fx.cards {
            assert_eq!(fx.page.dom().get(card), before.get(card));
        }
        assert_eq!(active_buttons(&fx.page), vec![fx.mains]);
    }

    #[test]
    fn click_inside_button_bubbles_to_it() {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let button = dom.insert_child(
            body,
            NodeData::new("button")
                .with_class(BUTTON_CLASS)
                .with_attr(FILTER_ATTR, "desserts"),
        );
        let icon = dom.insert_child(button, NodeData::new("span"));
        let mut page = Page::load(dom, PageConfig::default());

        page.click(icon);
        assert_eq!(
            page.controller().filter().active(),
            Some(&Filter::Category("desserts".into()))
        );
    }

    #[test]
    fn button_without_filter_value_is_ignored() {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let bare = dom.insert_child(body, NodeData::new("button").with_class(BUTTON_CLASS));
        let mut page = Page::load(dom, PageConfig::default());

        assert_eq!(page.controller().filter().buttons().count(), 0);
        page.click(bare);
        assert!(page.controller().filter().active().is_none());
        assert!(!page.dom().get(bare).unwrap().has_class(ACTIVE_CLASS));
    }
}
