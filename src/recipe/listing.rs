//! Recipe listing document.
//!
//! Builds the page the behaviors were written for: a navbar, a hero with an
//! in-page link down to the recipes, one filter button per category and one
//! card per recipe. Elements are stacked top to bottom with fixed heights.

use crate::behavior::filter::{ACTIVE_CLASS, ALL, BUTTON_CLASS, CARD_CLASS, CATEGORY_ATTR, FILTER_ATTR};
use crate::behavior::navbar::NAVBAR_CLASS;
use crate::dom::node::NodeData;
use crate::dom::tree::Dom;

use super::Recipe;

pub const NAVBAR_HEIGHT: i32 = 70;
pub const HERO_HEIGHT: i32 = 500;
pub const FILTER_BAR_HEIGHT: i32 = 80;
pub const CARD_HEIGHT: i32 = 300;
pub const CARD_GAP: i32 = 20;
pub const FOOTER_HEIGHT: i32 = 120;

/// Category given to recipes without `>> category:`.
pub const UNCATEGORIZED: &str = "uncategorized";

/// One card on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    /// Matched exactly against the filter buttons' values.
    pub category: String,
    /// Link to the recipe's own page.
    pub href: String,
}

impl ListingEntry {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            href: href.into(),
        }
    }

    pub fn from_recipe(recipe: &Recipe, href: impl Into<String>) -> Self {
        Self::new(
            recipe.title(),
            recipe.category().unwrap_or(UNCATEGORIZED),
            href,
        )
    }
}

/// Distinct categories in first-seen order. `all` is reserved for the
/// wildcard button and never listed.
pub fn categories(entries: &[ListingEntry]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for entry in entries {
        let category = entry.category.as_str();
        if category != ALL && !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Build the listing page for `entries`.
pub fn build(entries: &[ListingEntry]) -> Dom {
    let mut dom = Dom::new();
    let recipes_top = NAVBAR_HEIGHT + HERO_HEIGHT;
    let grid_top = recipes_top + FILTER_BAR_HEIGHT;
    let grid_height = entries.len() as i32 * (CARD_HEIGHT + CARD_GAP);
    let footer_top = grid_top + grid_height;
    let body_height = footer_top + FOOTER_HEIGHT;

    let body = dom.insert(
        NodeData::new("body")
            .with_id("top")
            .with_class("cooking-page")
            .with_layout(0, body_height),
    );

    let nav = dom.insert_child(
        body,
        NodeData::new("nav")
            .with_class(NAVBAR_CLASS)
            .with_layout(0, NAVBAR_HEIGHT),
    );
    dom.insert_child(
        nav,
        NodeData::new("a")
            .with_class("nav-brand")
            .with_attr("href", "#top")
            .with_text("Recipes"),
    );
    dom.insert_child(
        nav,
        NodeData::new("a")
            .with_class("nav-link")
            .with_attr("href", "#recipes")
            .with_text("Browse"),
    );

    let hero = dom.insert_child(
        body,
        NodeData::new("header")
            .with_class("hero")
            .with_layout(NAVBAR_HEIGHT, HERO_HEIGHT),
    );
    dom.insert_child(
        hero,
        NodeData::new("a")
            .with_class("cta")
            .with_attr("href", "#recipes")
            .with_text("See the recipes"),
    );

    let section = dom.insert_child(
        body,
        NodeData::new("section")
            .with_id("recipes")
            .with_layout(recipes_top, FILTER_BAR_HEIGHT + grid_height),
    );

    let bar = dom.insert_child(
        section,
        NodeData::new("div")
            .with_class("filter-buttons")
            .with_layout(recipes_top, FILTER_BAR_HEIGHT),
    );
    let all = NodeData::new("button")
        .with_classes([BUTTON_CLASS, ACTIVE_CLASS])
        .with_attr(FILTER_ATTR, ALL)
        .with_text("All");
    dom.insert_child(bar, all);
    for category in categories(entries) {
        dom.insert_child(
            bar,
            NodeData::new("button")
                .with_class(BUTTON_CLASS)
                .with_attr(FILTER_ATTR, category)
                .with_text(label(category)),
        );
    }

    let grid = dom.insert_child(
        section,
        NodeData::new("div")
            .with_class("recipe-grid")
            .with_layout(grid_top, grid_height),
    );
    for (idx, entry) in entries.iter().enumerate() {
        let top = grid_top + idx as i32 * (CARD_HEIGHT + CARD_GAP);
        let card = dom.insert_child(
            grid,
            NodeData::new("div")
                .with_class(CARD_CLASS)
                .with_attr(CATEGORY_ATTR, entry.category.as_str())
                .with_layout(top, CARD_HEIGHT),
        );
        dom.insert_child(card, NodeData::new("h3").with_text(entry.title.as_str()));
        dom.insert_child(
            card,
            NodeData::new("a")
                .with_attr("href", entry.href.as_str())
                .with_text("View Recipe"),
        );
    }

    let footer = dom.insert_child(
        body,
        NodeData::new("footer")
            .with_class("cooking-footer")
            .with_layout(footer_top, FOOTER_HEIGHT),
    );
    dom.insert_child(
        footer,
        NodeData::new("a")
            .with_attr("href", "#top")
            .with_text("Back to top"),
    );

    tracing::debug!(cards = entries.len(), height = body_height, "listing built");
    dom
}

/// Button label: the category with its first letter capitalized.
fn label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::parse;
    use pretty_assertions::assert_eq;

    fn entries() -> Vec<ListingEntry> {
        vec![
            ListingEntry::new("Bruschetta", "starters", "bruschetta.html"),
            ListingEntry::new("Lasagne", "mains", "lasagne.html"),
            ListingEntry::new("Risotto", "mains", "risotto.html"),
        ]
    }

    #[test]
    fn categories_in_first_seen_order() {
        assert_eq!(categories(&entries()), ["starters", "mains"]);
    }

    #[test]
    fn reserved_category_gets_no_button() {
        let entries = vec![ListingEntry::new("Odd", "all", "odd.html")];
        assert!(categories(&entries).is_empty());
    }

    #[test]
    fn buttons_and_cards() {
        let dom = build(&entries());
        let buttons = dom.query_by_class(BUTTON_CLASS);
        let values: Vec<String> = buttons
            .iter()
            .filter_map(|&b| dom.get(b)?.attr(FILTER_ATTR).map(|v| v.into_owned()))
            .collect();
        assert_eq!(values, ["all", "starters", "mains"]);
        assert!(dom.get(buttons[0]).unwrap().has_class(ACTIVE_CLASS));
        assert!(!dom.get(buttons[1]).unwrap().has_class(ACTIVE_CLASS));
        assert_eq!(dom.get(buttons[1]).unwrap().text.as_deref(), Some("Starters"));

        let cards = dom.query_by_class(CARD_CLASS);
        assert_eq!(cards.len(), 3);
        assert_eq!(
            dom.get(cards[2]).unwrap().attr(CATEGORY_ATTR).as_deref(),
            Some("mains")
        );
    }

    #[test]
    fn layout_stacks_sections() {
        let dom = build(&entries());
        let recipes = dom.query_by_id("recipes").unwrap();
        assert_eq!(dom.get(recipes).unwrap().layout.top, 570);
        let cards = dom.query_by_class(CARD_CLASS);
        assert_eq!(dom.get(cards[1]).unwrap().layout.top, 650 + 320);
        assert_eq!(dom.content_height(), 650 + 3 * 320 + 120);
    }

    #[test]
    fn has_navbar_and_in_page_links() {
        let dom = build(&entries());
        assert_eq!(dom.query_by_class(NAVBAR_CLASS).len(), 1);
        let links = dom.query_selector_all(r##"a[href^="#"]"##).unwrap();
        assert_eq!(links.len(), 4);
    }

    #[test]
    fn empty_listing_still_has_chrome() {
        let dom = build(&[]);
        assert_eq!(dom.query_by_class(BUTTON_CLASS).len(), 1);
        assert!(dom.query_by_class(CARD_CLASS).is_empty());
    }

    #[test]
    fn entry_from_recipe() {
        let recipe = parse(">> category: soups\n# Leek Soup\n").unwrap();
        let entry = ListingEntry::from_recipe(&recipe, "leek-soup.html");
        assert_eq!(entry, ListingEntry::new("Leek Soup", "soups", "leek-soup.html"));
        let plain = ListingEntry::from_recipe(&parse("# Toast\n").unwrap(), "toast.html");
        assert_eq!(plain.category, UNCATEGORIZED);
    }

    #[test]
    fn label_capitalizes() {
        assert_eq!(label("mains"), "Mains");
        assert_eq!(label(""), "");
    }
}
