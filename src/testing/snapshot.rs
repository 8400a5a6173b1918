//! Document outline rendering.
//!
//! One line per element in document order, indented two spaces per level:
//!
//! ```text
//! tag#id.class1.class2 [name=value] "text" {inline css}
//! ```
//!
//! Parts that are empty are left out. Layout is not shown.

use std::fmt::Write;

use crate::dom::node::{NodeData, NodeId};
use crate::dom::tree::Dom;

/// Render the whole document as an outline.
pub fn outline(dom: &Dom) -> String {
    dom.root()
        .map(|root| outline_from(dom, root))
        .unwrap_or_default()
}

/// Render the subtree rooted at `node`.
pub fn outline_from(dom: &Dom, node: NodeId) -> String {
    let mut out = Vec::new();
    write_node(dom, node, 0, &mut out);
    out.join("\n")
}

fn write_node(dom: &Dom, node: NodeId, depth: usize, out: &mut Vec<String>) {
    let Some(data) = dom.get(node) else { return };
    out.push(format!("{}{}", "  ".repeat(depth), describe(data)));
    for &child in dom.children(node) {
        write_node(dom, child, depth + 1, out);
    }
}

/// One outline line, without indentation.
pub fn describe(data: &NodeData) -> String {
    let mut line = data.tag.clone();
    if let Some(id) = &data.id {
        let _ = write!(line, "#{id}");
    }
    for class in &data.classes {
        let _ = write!(line, ".{class}");
    }
    for (name, value) in &data.attributes {
        let _ = write!(line, " [{name}={value}]");
    }
    if let Some(text) = &data.text {
        let _ = write!(line, " {text:?}");
    }
    let css = data.style.to_css_text();
    if !css.is_empty() {
        let _ = write!(line, " {{{css}}}");
    }
    line
}

// ===========================================================================
// Tests
// ===========================================================================
