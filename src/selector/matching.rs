//! Right-to-left selector matching against the document.

use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Dom;

use super::model::{
    Combinator, CompoundSelector, Selector, SelectorComponent, SelectorList, SelectorPart,
};

/// Whether `node_id` matches any selector in the list.
pub fn matches_list(list: &SelectorList, node_id: NodeId, dom: &Dom) -> bool {
    list.selectors
        .iter()
        .any(|selector| matches_selector(selector, node_id, dom))
}

/// Check whether a full selector matches a given node.
///
/// The rightmost compound must match the node itself; the remaining
/// compounds are matched against its ancestors following the combinators.
/// A descendant step tries every matching ancestor, nearest first, before
/// giving up.
pub fn matches_selector(selector: &Selector, node_id: NodeId, dom: &Dom) -> bool {
    match selector.parts.split_last() {
        Some((SelectorPart::Compound(last), rest)) => matches_from(last, rest, node_id, dom),
        _ => false,
    }
}

/// Match `compound` on `node_id`, then the `rest` of the chain above it.
fn matches_from(
    compound: &CompoundSelector,
    rest: &[SelectorPart],
    node_id: NodeId,
    dom: &Dom,
) -> bool {
    if !dom.get(node_id).is_some_and(|data| matches_compound(compound, data)) {
        return false;
    }
    let Some((SelectorPart::Combinator(combinator), before)) = rest.split_last() else {
        return rest.is_empty();
    };
    // Combinator without a preceding compound.
    let Some((SelectorPart::Compound(next), before)) = before.split_last() else {
        return false;
    };

    match combinator {
        Combinator::Child => dom
            .parent(node_id)
            .is_some_and(|parent| matches_from(next, before, parent, dom)),
        Combinator::Descendant => dom
            .ancestors(node_id)
            .into_iter()
            .any(|ancestor| matches_from(next, before, ancestor, dom)),
    }
}

/// Check whether a compound selector matches a single node's data.
fn matches_compound(compound: &CompoundSelector, node: &NodeData) -> bool {
    compound.components.iter().all(|component| match component {
        SelectorComponent::Type(tag) => node.tag.eq_ignore_ascii_case(tag),
        SelectorComponent::Universal => true,
        SelectorComponent::Class(class) => node.has_class(class),
        SelectorComponent::Id(id) => node.id.as_deref() == Some(id.as_str()),
        SelectorComponent::Attribute(attr) => match (&attr.matcher, node.attr(&attr.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some((op, expected)), Some(actual)) => op.matches(&actual, expected),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeData;
    use crate::selector::parse_selector_list;

    /// ```text
    ///   body
    ///   ├── nav.navbar
    ///   │   └── ul.nav-menu
    ///   │       └── li
    ///   │           └── a[href="#recipes"]
    ///   └── section#recipes
    ///       └── div.recipe-card[data-category="mains"]
    /// ```
    fn build() -> (Dom, NodeId, NodeId) {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let nav = dom.insert_child(body, NodeData::new("nav").with_class("navbar"));
        let ul = dom.insert_child(nav, NodeData::new("ul").with_class("nav-menu"));
        let li = dom.insert_child(ul, NodeData::new("li"));
        let a = dom.insert_child(li, NodeData::new("a").with_attr("href", "#recipes"));
        let section = dom.insert_child(body, NodeData::new("section").with_id("recipes"));
        let card = dom.insert_child(
            section,
            NodeData::new("div")
                .with_class("recipe-card")
                .with_attr("data-category", "mains"),
        );
        (dom, a, card)
    }

    fn check(dom: &Dom, input: &str, node: NodeId) -> bool {
        let list = parse_selector_list(input).expect("selector should parse");
        matches_list(&list, node, dom)
    }

    #[test]
    fn attribute_prefix() {
        let (dom, a, card) = build();
        assert!(check(&dom, r##"a[href^="#"]"##, a));
        assert!(!check(&dom, r##"a[href^="#"]"##, card));
    }

    #[test]
    fn attribute_presence_and_equality() {
        let (dom, _, card) = build();
        assert!(check(&dom, "[data-category]", card));
        assert!(check(&dom, "[data-category=mains]", card));
        assert!(!check(&dom, "[data-category=starters]", card));
    }

    #[test]
    fn class_via_attribute_selector() {
        let (dom, _, card) = build();
        assert!(check(&dom, "[class~=recipe-card]", card));
    }

    #[test]
    fn descendant_combinator_skips_levels() {
        let (dom, a, _) = build();
        assert!(check(&dom, ".navbar a", a));
        assert!(check(&dom, "nav ul a", a));
        assert!(!check(&dom, "section a", a));
    }

    #[test]
    fn child_combinator_requires_direct_parent() {
        let (dom, a, card) = build();
        assert!(check(&dom, "li > a", a));
        assert!(!check(&dom, "ul > a", a));
        assert!(check(&dom, "#recipes > .recipe-card", card));
    }

    #[test]
    fn mixed_combinators() {
        let (dom, a, _) = build();
        assert!(check(&dom, "body .nav-menu > li > a", a));
        assert!(!check(&dom, "body > .nav-menu a", a));
    }

    #[test]
    fn descendant_backtracks_past_nearest_match() {
        let mut dom = Dom::new();
        let x = dom.insert(NodeData::new("div").with_class("x"));
        let outer = dom.insert_child(x, NodeData::new("div").with_class("y"));
        let inner = dom.insert_child(outer, NodeData::new("div").with_class("y"));
        let z = dom.insert_child(inner, NodeData::new("span").with_class("z"));

        assert!(check(&dom, ".x > .y .z", z));
        assert!(!check(&dom, ".x > .y > .z", z));
        assert_eq!(dom.query_selector_all(".x > .y .z").unwrap(), vec![z]);
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        let (dom, a, _) = build();
        assert!(check(&dom, "A", a));
    }

    #[test]
    fn universal_and_list() {
        let (dom, a, card) = build();
        assert!(check(&dom, "*", card));
        assert!(check(&dom, ".missing, a", a));
    }

    #[test]
    fn stale_node_never_matches() {
        let (mut dom, _, _) = build();
        let ghost = dom.insert(NodeData::new("div"));
        let list = parse_selector_list("div").unwrap();
        assert!(matches_list(&list, ghost, &dom));
        let other = Dom::new();
        assert!(!matches_list(&list, ghost, &other));
    }
}
