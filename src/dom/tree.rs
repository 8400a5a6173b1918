//! Tree operations: insert, parent/child links, document-order walk.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

/// The document, backed by a slotmap arena.
///
/// Elements live in one `SlotMap`; the tree shape is kept beside them in
/// secondary maps keyed by the same ids. The page never adds or drops
/// elements after load, so there is no removal API.
#[derive(Debug, Clone, Default)]
pub struct Dom {
    nodes: SlotMap<NodeId, NodeData>,
    kids: SecondaryMap<NodeId, Vec<NodeId>>,
    up: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached element. The first one added is the document root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.root.get_or_insert(id);
        id
    }

    /// Append an element as the last child of `parent`.
    ///
    /// An unknown `parent` leaves the element detached (debug builds panic).
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(self.contains(parent), "insert_child under a missing parent");
        let id = self.nodes.insert(data);
        if self.contains(parent) {
            self.up.insert(id, parent);
            match self.kids.get_mut(parent) {
                Some(list) => list.push(id),
                None => {
                    self.kids.insert(parent, vec![id]);
                }
            }
        }
        id
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.up.get(id).copied()
    }

    /// Children in document order; empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.kids.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Parent, grandparent, ... up to the root. `id` itself is excluded.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        std::iter::successors(self.parent(id), |&node| self.parent(node)).collect()
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of elements, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// `start` and its descendants in document (pre-)order.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        if self.contains(start) {
            self.collect_subtree(start, &mut order);
        }
        order
    }

    fn collect_subtree(&self, node: NodeId, order: &mut Vec<NodeId>) {
        order.push(node);
        for &child in self.children(node) {
            self.collect_subtree(child, order);
        }
    }

    /// Every element reachable from the root, in document order.
    pub fn document_order(&self) -> Vec<NodeId> {
        self.root
            .map(|root| self.walk_depth_first(root))
            .unwrap_or_default()
    }

    /// Bottom edge of the lowest element; the scrollable document height.
    pub fn content_height(&self) -> i32 {
        self.nodes
            .values()
            .map(|data| data.layout.bottom())
            .fold(0, i32::max)
    }
}
