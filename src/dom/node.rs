//! Node types: NodeId, NodeData, LayoutBox.

use std::borrow::Cow;
use std::collections::BTreeMap;

use slotmap::new_key_type;

use crate::style::InlineStyle;

new_key_type! {
    /// Unique identifier for a document node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Vertical placement of an element in document coordinates (pixels).
///
/// The page is static markup, so layout is fixed when the document is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutBox {
    pub top: i32,
    pub height: i32,
}

impl LayoutBox {
    pub const fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

/// Data associated with a single element.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Lowercase tag name (e.g. "a", "button", "div").
    pub tag: String,
    /// The `id` attribute.
    pub id: Option<String>,
    /// The `class` attribute, split into class names.
    pub classes: Vec<String>,
    /// Every other attribute, keyed by lowercase name.
    pub attributes: BTreeMap<String, String>,
    /// Inline `style` properties written by scripts.
    pub style: InlineStyle,
    pub layout: LayoutBox,
    /// Text content, for elements that carry a label.
    pub text: Option<String>,
}

impl NodeData {
    /// Create an element with no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: InlineStyle::default(),
            layout: LayoutBox::default(),
            text: None,
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.add_class(&class);
        self
    }

    /// Add multiple classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            let class = class.into();
            self.add_class(&class);
        }
        self
    }

    /// Set an attribute (builder). `id` and `class` land in their own fields.
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Place the element (builder).
    pub fn with_layout(mut self, top: i32, height: i32) -> Self {
        self.layout = LayoutBox::new(top, height);
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut InlineStyle {
        &mut self.style
    }

    /// Read an attribute the way `getAttribute` does, including `id` and `class`.
    pub fn attr(&self, name: &str) -> Option<Cow<'_, str>> {
        match name.to_ascii_lowercase().as_str() {
            "id" => self.id.as_deref().map(Cow::Borrowed),
            "class" if self.classes.is_empty() => None,
            "class" => Some(Cow::Owned(self.classes.join(" "))),
            other => self.attributes.get(other).map(|v| Cow::Borrowed(v.as_str())),
        }
    }

    /// Write an attribute. `class` replaces the whole class list.
    fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name.to_ascii_lowercase().as_str() {
            "id" => self.id = Some(value),
            "class" => {
                self.classes.clear();
                for class in value.split_whitespace() {
                    self.add_class(class);
                }
            }
            other => {
                self.attributes.insert(other.to_owned(), value);
            }
        }
    }

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add the class when `on`, remove it otherwise.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Whether the element takes part in layout (`display` is not `none`).
    pub fn is_displayed(&self) -> bool {
        !self.style.is_hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = NodeData::new("A");
        assert_eq!(data.tag, "a");
        assert!(data.id.is_none());
        assert!(data.classes.is_empty());
        assert!(data.attributes.is_empty());
        assert_eq!(data.style, InlineStyle::default());
        assert!(data.is_displayed());
    }

    #[test]
    fn builder_with_class_dedup() {
        let data = NodeData::new("button")
            .with_class("filter-btn")
            .with_classes(["filter-btn", "active"]);
        assert_eq!(data.classes, vec!["filter-btn", "active"]);
    }

    #[test]
    fn id_and_class_are_attributes() {
        let data = NodeData::new("div")
            .with_attr("id", "recipes")
            .with_attr("class", "recipe-card  featured");
        assert_eq!(data.id.as_deref(), Some("recipes"));
        assert_eq!(data.classes, vec!["recipe-card", "featured"]);
        assert_eq!(data.attr("class").as_deref(), Some("recipe-card featured"));
        assert_eq!(data.attr("ID").as_deref(), Some("recipes"));
        assert!(data.attributes.is_empty());
    }

    #[test]
    fn attribute_names_are_case_insensitive() {
        let data = NodeData::new("button").with_attr("Data-Filter", "mains");
        assert_eq!(data.attr("data-filter").as_deref(), Some("mains"));
    }

    #[test]
    fn missing_attribute() {
        let data = NodeData::new("div");
        assert!(data.attr("data-category").is_none());
        assert!(data.attr("class").is_none());
    }

    #[test]
    fn toggle_class_follows_flag() {
        let mut data = NodeData::new("button");
        data.toggle_class("active", true);
        data.toggle_class("active", true);
        assert_eq!(data.classes, vec!["active"]);
        data.toggle_class("active", false);
        assert!(!data.has_class("active"));
    }

    #[test]
    fn remove_class_noop() {
        let mut data = NodeData::new("div");
        data.remove_class("nonexistent");
        assert!(data.classes.is_empty());
    }

    #[test]
    fn layout_bottom() {
        let data = NodeData::new("section").with_layout(1200, 400);
        assert_eq!(data.layout.bottom(), 1600);
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
