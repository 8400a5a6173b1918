//! Document queries: `querySelector`-style lookups plus id/class shortcuts.
//!
//! Results are in document order (pre-order from the root), which is what
//! "first match" means for [`Dom::query_selector`].

use super::node::NodeId;
use super::tree::Dom;
use crate::selector::{matches_list, parse_selector_list, SelectorError, SelectorList};

impl Dom {
    /// First element matching `selector`, or `None`.
    ///
    /// Fails only when `selector` does not parse.
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let list = parse_selector_list(selector)?;
        Ok(self.select_first(&list))
    }

    /// Every element matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let list = parse_selector_list(selector)?;
        Ok(self.select(&list))
    }

    /// Every element matching a parsed selector list, in document order.
    pub fn select(&self, list: &SelectorList) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|&id| matches_list(list, id, self))
            .collect()
    }

    pub fn select_first(&self, list: &SelectorList) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|&id| matches_list(list, id, self))
    }

    /// `node` itself or its nearest ancestor matching `list`.
    pub fn closest(&self, node: NodeId, list: &SelectorList) -> Option<NodeId> {
        if !self.contains(node) {
            return None;
        }
        std::iter::once(node)
            .chain(self.ancestors(node))
            .find(|&id| matches_list(list, id, self))
    }

    /// Find the first element, in document order, with the given id.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.document_order()
            .into_iter()
            .find(|&node| self.get(node).and_then(|d| d.id.as_deref()) == Some(id))
    }

    /// Find all elements with the given class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.document_order()
            .into_iter()
            .filter(|&node| self.get(node).is_some_and(|d| d.has_class(class)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::node::{NodeData, NodeId};
    use crate::dom::tree::Dom;
    use crate::selector::{parse_selector_list, SelectorError};

    /// ```text
    ///   body
    ///   ├── nav.navbar
    ///   │   ├── a[href="#recipes"]
    ///   │   └── a[href="about.html"]
    ///   ├── div.filters
    ///   │   ├── button.filter-btn.active[data-filter=all]
    ///   │   └── button.filter-btn[data-filter=mains]
    ///   │       └── span
    ///   └── section#recipes
    /// ```
    struct Page {
        dom: Dom,
        nav: NodeId,
        frag_link: NodeId,
        all_btn: NodeId,
        mains_btn: NodeId,
        label: NodeId,
        section: NodeId,
    }

    fn build() -> Page {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let nav = dom.insert_child(body, NodeData::new("nav").with_class("navbar"));
        let frag_link = dom.insert_child(nav, NodeData::new("a").with_attr("href", "#recipes"));
        let _page_link = dom.insert_child(nav, NodeData::new("a").with_attr("href", "about.html"));
        let filters = dom.insert_child(body, NodeData::new("div").with_class("filters"));
        let all_btn = dom.insert_child(
            filters,
            NodeData::new("button")
                .with_classes(["filter-btn", "active"])
                .with_attr("data-filter", "all"),
        );
        let mains_btn = dom.insert_child(
            filters,
            NodeData::new("button")
                .with_class("filter-btn")
                .with_attr("data-filter", "mains"),
        );
        let label = dom.insert_child(mains_btn, NodeData::new("span"));
        let section = dom.insert_child(body, NodeData::new("section").with_id("recipes"));
        Page {
            dom,
            nav,
            frag_link,
            all_btn,
            mains_btn,
            label,
            section,
        }
    }

    #[test]
    fn query_selector_first_in_document_order() {
        let page = build();
        assert_eq!(page.dom.query_selector(".filter-btn"), Ok(Some(page.all_btn)));
        assert_eq!(page.dom.query_selector("#recipes"), Ok(Some(page.section)));
        assert_eq!(page.dom.query_selector(".navbar"), Ok(Some(page.nav)));
    }

    #[test]
    fn query_selector_no_match_is_ok_none() {
        let page = build();
        assert_eq!(page.dom.query_selector("#missing"), Ok(None));
    }

    #[test]
    fn query_selector_malformed_is_err() {
        let page = build();
        assert!(matches!(
            page.dom.query_selector("#"),
            Err(SelectorError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn query_selector_all_fragment_links_only() {
        let page = build();
        let anchors = page.dom.query_selector_all(r##"a[href^="#"]"##).unwrap();
        assert_eq!(anchors, vec![page.frag_link]);
    }

    #[test]
    fn query_selector_all_keeps_document_order() {
        let page = build();
        let buttons = page.dom.query_selector_all("button").unwrap();
        assert_eq!(buttons, vec![page.all_btn, page.mains_btn]);
    }

    #[test]
    fn closest_walks_up_from_child() {
        let page = build();
        let list = parse_selector_list(".filter-btn").unwrap();
        assert_eq!(page.dom.closest(page.label, &list), Some(page.mains_btn));
        assert_eq!(page.dom.closest(page.mains_btn, &list), Some(page.mains_btn));
        assert_eq!(page.dom.closest(page.section, &list), None);
    }

    #[test]
    fn query_by_id_and_class() {
        let page = build();
        assert_eq!(page.dom.query_by_id("recipes"), Some(page.section));
        assert!(page.dom.query_by_id("nope").is_none());
        assert_eq!(
            page.dom.query_by_class("filter-btn"),
            vec![page.all_btn, page.mains_btn]
        );
        assert!(page.dom.query_by_class("recipe-card").is_empty());
    }

    #[test]
    fn queries_on_empty_dom() {
        let dom = Dom::new();
        assert_eq!(dom.query_selector("a"), Ok(None));
        assert!(dom.query_by_id("x").is_none());
        assert!(dom.query_by_class("x").is_empty());
    }
}
