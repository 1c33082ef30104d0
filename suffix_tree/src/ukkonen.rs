// Online construction: one phase per symbol of the terminated string,
// and inside each phase as many extensions as it takes until a suffix
// turns out to be in the tree already.
use log::trace;

use crate::types::active_point::ActivePoint;
use crate::types::end_marker::EndMarker;
use crate::types::label_data::LabelData;
use crate::types::node::{Node, NodeId, ROOT};

/// Counters collected while the tree is built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConstructionStats {
    /// One per symbol, terminator included.
    pub phases: usize,
    /// New leaf hung directly off an existing node.
    pub leaf_extensions: usize,
    /// Edge split with a new internal node and a new leaf.
    pub splits: usize,
    /// Phases cut short because the suffix was already present.
    pub early_stops: usize,
    /// Whole edges skipped over while repositioning the active point.
    pub edge_hops: usize,
}

// Outcome of a single extension
#[derive(Debug, PartialEq, Eq)]
enum Rule {
    NewLeaf,
    Split,
    AlreadyPresent,
}

pub(crate) struct Builder<'s> {
    string: &'s [LabelData],
    nodes: Vec<Node>,
    global_end: EndMarker,
    active: ActivePoint,
    stats: ConstructionStats,
}

impl<'s> Builder<'s> {
    pub(crate) fn new(string: &'s [LabelData]) -> Self {
        // A tree over n symbols never has more than 2n nodes
        let mut nodes = Vec::with_capacity(2 * string.len());
        nodes.push(Node::root());

        Builder {
            string,
            nodes,
            global_end: EndMarker::new(),
            active: ActivePoint::new(),
            stats: ConstructionStats::default(),
        }
    }

    pub(crate) fn build(mut self) -> (Vec<Node>, ConstructionStats) {
        // Extensions carry over between phases: suffixes that already
        // have a leaf are extended by the global end alone.
        let mut j = 0;

        for i in 0..self.string.len() {
            self.global_end.advance();
            self.stats.phases += 1;

            // Split from the previous extension whose suffix link is
            // not known yet.
            let mut pending: Option<NodeId> = None;

            while j <= i {
                self.skip_count(i);

                match self.extend(i, j, &mut pending) {
                    Rule::AlreadyPresent => {
                        self.stats.early_stops += 1;
                        break;
                    }
                    Rule::NewLeaf | Rule::Split => {
                        j += 1;
                        self.follow_suffix_link(i, j);
                    }
                }
            }
            debug_assert!(
                pending.is_none(),
                "phase {} ended with an unlinked internal node",
                i
            );

            // The next phase has one more symbol to account for. From the
            // root the length is recomputed outright so it cannot drift.
            if self.active.node == ROOT {
                self.active.length = i + 1 - j;
            } else {
                self.active.length += 1;
            }

            trace!(
                "phase {}: {} suffixes explicit, active point {:?}",
                i,
                j,
                self.active
            );
        }

        (self.nodes, self.stats)
    }

    // Moves the active point down over every edge it covers completely,
    // one hop per edge, comparing only first symbols.
    fn skip_count(&mut self, i: usize) {
        while self.active.length > 0 {
            let first = self.string[i - self.active.length];
            let child = self.edge_from(self.active.node, first);
            let edge_length = self.nodes[child].length();

            if edge_length > self.active.length {
                break;
            }

            self.active.node = child;
            self.active.length -= edge_length;
            self.stats.edge_hops += 1;
        }

        self.active.edge = if self.active.on_node() {
            None
        } else {
            Some(self.string[i - self.active.length])
        };
    }

    // Extends the suffix starting at j with string[i].
    fn extend(&mut self, i: usize, j: usize, pending: &mut Option<NodeId>) -> Rule {
        let c = self.string[i];
        let node = self.active.node;

        match self.active.edge {
            None => {
                // A split made by the previous extension represents
                // string[j - 1..i], and `node` represents string[j..i].
                if let Some(prev) = pending.take() {
                    self.nodes[prev].suffix_link = Some(node);
                }

                if self.nodes[node].has_child(&c) {
                    return Rule::AlreadyPresent;
                }

                self.attach_leaf(node, i, j);
                self.stats.leaf_extensions += 1;
                Rule::NewLeaf
            }
            Some(edge) => {
                let child = self.edge_from(node, edge);
                let next = self.string[self.nodes[child].start + self.active.length];

                if next == c {
                    debug_assert!(
                        pending.is_none(),
                        "suffix already present right after a split in phase {}",
                        i
                    );
                    return Rule::AlreadyPresent;
                }

                let split = self.split(node, child, i, j);
                if let Some(prev) = pending.replace(split) {
                    self.nodes[prev].suffix_link = Some(split);
                }
                self.stats.splits += 1;
                Rule::Split
            }
        }
    }

    fn follow_suffix_link(&mut self, i: usize, j: usize) {
        let node = self.active.node;
        self.active.node = self.nodes[node].suffix_link.unwrap_or(ROOT);

        // Once j passes i every suffix of this phase is explicit and
        // there is nothing left to point at.
        if self.active.node == ROOT && j <= i {
            self.active.length = i - j;
        }
    }

    fn attach_leaf(&mut self, parent: NodeId, i: usize, j: usize) -> NodeId {
        let id = self.nodes.len();
        self.nodes
            .push(Node::leaf(id, parent, i, &self.global_end, j));
        self.nodes[parent].children.insert(self.string[i], id);
        id
    }

    // Breaks the edge into `child` after `active.length` symbols. The
    // upper part becomes a new internal node, holding the old edge tail
    // and a new leaf for string[i..] as its two children.
    fn split(&mut self, node: NodeId, child: NodeId, i: usize, j: usize) -> NodeId {
        let length = self.active.length;
        let start = self.nodes[child].start;

        let split = self.nodes.len();
        self.nodes
            .push(Node::internal(split, node, start, start + length));
        self.nodes[node].children.insert(self.string[start], split);

        let tail = &mut self.nodes[child];
        tail.start = start + length;
        tail.parent = Some(split);
        self.nodes[split]
            .children
            .insert(self.string[start + length], child);

        self.attach_leaf(split, i, j);
        split
    }

    fn edge_from(&self, node: NodeId, symbol: LabelData) -> NodeId {
        match self.nodes[node].child(&symbol) {
            Some(child) => child,
            None => panic!(
                "no edge for {:?} below node {}, the active point left the tree",
                symbol, node
            ),
        }
    }
}
