use crate::types::node::{Node, NodeId};

/// Suffix indices of the leaves below a node, in lexicographic order of
/// the suffixes.
///
/// The walk keeps its own stack, so the depth of the tree is not bounded
/// by the call stack. Every node is visited once.
pub struct SuffixIndices<'t> {
    nodes: &'t [Node],
    stack: Vec<NodeId>,
}

impl<'t> SuffixIndices<'t> {
    pub(crate) fn new(nodes: &'t [Node], from: NodeId) -> Self {
        SuffixIndices {
            nodes,
            stack: vec![from],
        }
    }
}

impl<'t> Iterator for SuffixIndices<'t> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(id) = self.stack.pop() {
            let node = &self.nodes[id];
            if let Some(index) = node.suffix_index {
                return Some(index);
            }
            // Pushed in reverse so the smallest symbol comes off first
            self.stack.extend(node.children.values().rev().copied());
        }
        None
    }
}
