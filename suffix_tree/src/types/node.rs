use std::collections::BTreeMap;

use super::end_marker::EndMarker;
use super::label_data::LabelData;

pub type NodeId = usize;
// At most one child per symbol, kept in symbol order so that iterating
// the children is already the lexicographic order the traversal needs.
pub type Tree = BTreeMap<LabelData, NodeId>;

/// The root is always the first node allocated.
pub const ROOT: NodeId = 0;

/// Where the label of the edge entering a node stops.
#[derive(Debug)]
pub enum EdgeEnd {
    /// Internal nodes (and the root) own their end.
    Fixed(usize),
    /// Leaves follow the global end marker.
    Global(EndMarker),
}

#[derive(Debug)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Tree,
    // Non-owning. Only followed during construction.
    pub(crate) suffix_link: Option<NodeId>,

    // The incoming edge is labeled string[start..end]
    pub(crate) start: usize,
    pub(crate) end: EdgeEnd,

    // For leaves, the offset of the suffix that the path from the
    // root down to this leaf spells out.
    pub(crate) suffix_index: Option<usize>,
}

impl Node {
    pub(crate) fn root() -> Node {
        Node {
            id: ROOT,
            parent: None,
            children: BTreeMap::new(),
            suffix_link: Some(ROOT),
            start: 0,
            end: EdgeEnd::Fixed(0),
            suffix_index: None,
        }
    }

    pub(crate) fn leaf(
        id: NodeId,
        parent: NodeId,
        start: usize,
        global_end: &EndMarker,
        suffix_index: usize,
    ) -> Node {
        Node {
            id,
            parent: Some(parent),
            children: BTreeMap::new(),
            suffix_link: None,
            start,
            end: EdgeEnd::Global(global_end.share()),
            suffix_index: Some(suffix_index),
        }
    }

    // New internal nodes link to the root until the next extension
    // tells us where they really belong.
    pub(crate) fn internal(id: NodeId, parent: NodeId, start: usize, end: usize) -> Node {
        Node {
            id,
            parent: Some(parent),
            children: BTreeMap::new(),
            suffix_link: Some(ROOT),
            start,
            end: EdgeEnd::Fixed(end),
            suffix_index: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn has_child(&self, b: &LabelData) -> bool {
        self.children.contains_key(b)
    }

    pub fn child(&self, b: &LabelData) -> Option<NodeId> {
        self.children.get(b).copied()
    }

    pub fn children(&self) -> &Tree {
        &self.children
    }

    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    pub fn suffix_index(&self) -> Option<usize> {
        self.suffix_index
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.end, EdgeEnd::Global(_))
    }

    pub fn is_internal_node(&self) -> bool {
        !self.is_root() && !self.is_leaf()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        match &self.end {
            EdgeEnd::Fixed(end) => *end,
            EdgeEnd::Global(end) => end.value(),
        }
    }

    pub fn length(&self) -> usize {
        self.end() - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_grows_with_the_marker() {
        let end = EndMarker::new();
        end.advance();
        let leaf = Node::leaf(1, ROOT, 0, &end, 0);
        assert_eq!(leaf.length(), 1);

        end.advance();
        end.advance();
        assert_eq!(leaf.end(), 3);
        assert_eq!(leaf.length(), 3);
        assert!(leaf.is_leaf());
        assert!(!leaf.is_internal_node());
    }

    #[test]
    fn internal_node_keeps_its_own_end() {
        let end = EndMarker::new();
        let node = Node::internal(1, ROOT, 2, 4);
        end.advance();
        assert_eq!(node.length(), 2);
        assert!(node.is_internal_node());
        assert_eq!(node.suffix_link(), Some(ROOT));
    }

    #[test]
    fn root_links_to_itself() {
        let root = Node::root();
        assert!(root.is_root());
        assert_eq!(root.suffix_link(), Some(ROOT));
        assert_eq!(root.length(), 0);
    }
}
