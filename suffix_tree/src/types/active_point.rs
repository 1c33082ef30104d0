use super::label_data::LabelData;
use super::node::{NodeId, ROOT};

/// Where the next extension starts looking.
///
/// `length` symbols have been matched below `node`, along the edge whose
/// first symbol is `edge`. When `length` is 0 the point sits exactly on
/// `node` and `edge` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    pub node: NodeId,
    pub edge: Option<LabelData>,
    pub length: usize,
}

impl ActivePoint {
    pub fn new() -> Self {
        ActivePoint {
            node: ROOT,
            edge: None,
            length: 0,
        }
    }

    pub fn on_node(&self) -> bool {
        self.length == 0
    }
}

impl Default for ActivePoint {
    fn default() -> Self {
        Self::new()
    }
}
