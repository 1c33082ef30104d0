use std::fmt;

use crate::types::label_data::SENTINEL;

/// Reasons a text is refused before construction starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// There is nothing to index.
    EmptyInput,
    /// The text already holds the terminator byte.
    ContainsSentinel { position: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyInput => write!(f, "input text is empty"),
            BuildError::ContainsSentinel { position } => write!(
                f,
                "input text contains the reserved terminator `{}` at offset {}",
                SENTINEL as char, position
            ),
        }
    }
}

impl std::error::Error for BuildError {}
