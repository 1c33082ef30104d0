// Suffix tree over a single byte string, built online with Ukkonen's
// algorithm. Walking the finished tree in symbol order gives the suffix
// array of the text.
//
// Some inspiration for structure taken from https://github.com/BurntSushi/suffix
use std::fmt;

use log::debug;

mod error;
mod traversal;
mod types;
mod ukkonen;

pub use error::BuildError;
pub use traversal::SuffixIndices;
pub use types::label_data::{LabelData, SENTINEL};
pub use types::node::{Node, NodeId, Tree};
pub use ukkonen::ConstructionStats;

use types::node::ROOT;
use ukkonen::Builder;

pub struct SuffixTree {
    raw_string: Vec<u8>,
    // raw_string with the separator appended
    string: Vec<LabelData>,
    nodes: Vec<Node>,
    stats: ConstructionStats,
}

impl SuffixTree {
    /// Builds the suffix tree of `s`.
    ///
    /// Fails if `s` is empty or already contains [`SENTINEL`]; the
    /// terminator is appended internally.
    pub fn new<T: AsRef<[u8]>>(s: T) -> Result<SuffixTree, BuildError> {
        init_suffix_tree(s.as_ref())
    }

    /// The indexed text, without the terminator.
    pub fn text(&self) -> &[u8] {
        &self.raw_string
    }

    // Gets the label going into the node
    pub fn label_of_node(&self, node: &Node) -> &[LabelData] {
        &self.string[node.start()..node.end()]
    }

    pub fn label_of_node_formatted(&self, node: &Node) -> String {
        let bytes = self
            .label_of_node(node)
            .iter()
            .map(LabelData::as_readable)
            .collect::<Vec<_>>();

        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn stats(&self) -> &ConstructionStats {
        &self.stats
    }

    /// Suffix start offsets in lexicographic order of the suffixes. The
    /// terminator-only suffix (offset `text().len()`) comes first.
    pub fn suffix_indices(&self) -> SuffixIndices<'_> {
        SuffixIndices::new(&self.nodes, ROOT)
    }

    pub fn suffix_array(&self) -> Vec<usize> {
        self.suffix_indices().collect()
    }

    pub fn contains(&self, pattern: &[u8]) -> bool {
        let (_, matched) = self.walk(pattern);
        matched == pattern.len()
    }

    /// Every offset at which `pattern` starts in the text, ascending.
    pub fn occurrences(&self, pattern: &[u8]) -> Vec<usize> {
        let (locus, matched) = self.walk(pattern);
        if matched < pattern.len() {
            return vec![];
        }

        let mut found = SuffixIndices::new(&self.nodes, locus).collect::<Vec<_>>();
        found.sort_unstable();
        found
    }

    /// The longest prefix of `pattern` found anywhere in the text, as the
    /// half-open range `(start, end)` of one of its occurrences.
    pub fn longest_substring(&self, pattern: &[u8]) -> Option<(usize, usize)> {
        let (locus, matched) = self.walk(pattern);
        if matched == 0 {
            return None;
        }

        // Any leaf below the locus starts with the matched prefix
        let start = SuffixIndices::new(&self.nodes, locus).next()?;
        Some((start, start + matched))
    }

    // Follows `pattern` down from the root for as long as it matches.
    // Returns the highest node whose subtree holds every suffix starting
    // with the matched part, and how many bytes matched.
    fn walk(&self, pattern: &[u8]) -> (NodeId, usize) {
        let mut node = ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            let child = match self.nodes[node].child(&LabelData::new(pattern[matched])) {
                Some(child) => child,
                None => break,
            };

            for symbol in self.label_of_node(&self.nodes[child]) {
                if matched == pattern.len() || *symbol != pattern[matched] {
                    return (child, matched);
                }
                matched += 1;
            }

            node = child;
        }

        (node, matched)
    }
}

impl fmt::Debug for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n-----------------------------------------")?;
        writeln!(f, "SUFFIX TREE")?;
        writeln!(f, "text: {}", String::from_utf8_lossy(&self.raw_string))?;

        let mut stack = vec![(ROOT, 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_root() {
                writeln!(f, "ROOT")?;
            } else {
                let indent = " ".repeat(depth * 2);
                let label = self.label_of_node_formatted(node);
                match node.suffix_index() {
                    Some(index) => writeln!(f, "{}{:?} [{}]", indent, label, index)?,
                    None => writeln!(f, "{}{:?}", indent, label)?,
                }
            }
            stack.extend(node.children().values().rev().map(|&c| (c, depth + 1)));
        }

        writeln!(f, "-----------------------------------------")
    }
}

fn init_suffix_tree(s: &[u8]) -> Result<SuffixTree, BuildError> {
    if s.is_empty() {
        return Err(BuildError::EmptyInput);
    }
    if let Some(position) = s.iter().position(|&b| b == SENTINEL) {
        return Err(BuildError::ContainsSentinel { position });
    }

    // Transforms the input into a list of LabelData and appends the
    // separator, which ensures a unique last symbol.
    let mut string = s.iter().map(|&b| LabelData::new(b)).collect::<Vec<_>>();
    string.push(LabelData::Sep);

    let (nodes, stats) = Builder::new(&string).build();
    debug!(
        "Built suffix tree over {} symbols: {} nodes, {} splits, {} early stops, {} edge hops",
        string.len(),
        nodes.len(),
        stats.splits,
        stats.early_stops,
        stats.edge_hops
    );

    Ok(SuffixTree {
        raw_string: s.to_vec(),
        string,
        nodes,
        stats,
    })
}

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
