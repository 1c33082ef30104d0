use std::cmp::Ordering;
use std::fmt;

/// The byte reserved for the terminator. Input text may not contain it, and
/// it is how the terminator is rendered when labels are printed.
pub const SENTINEL: u8 = b'$';

// Symbols on an edge label. The separator is appended exactly once,
// after the last byte of the text, so every suffix ends in its own
// leaf and the tree is explicit once the last phase has run.
#[derive(Copy, Clone)]
pub enum LabelData {
    Byte(u8),
    Sep,
}

impl LabelData {
    pub fn new(b: u8) -> Self {
        LabelData::Byte(b)
    }

    pub fn as_readable(&self) -> u8 {
        match self {
            Self::Byte(b) => *b,
            Self::Sep => SENTINEL,
        }
    }
}

impl PartialEq for LabelData {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Byte(b1), Self::Byte(b2)) => b1 == b2,
            (Self::Sep, Self::Sep) => true,
            _ => false,
        }
    }
}

impl PartialEq<u8> for LabelData {
    fn eq(&self, other: &u8) -> bool {
        match (self, other) {
            (Self::Byte(b1), b2) => b1 == b2,
            _ => false,
        }
    }
}

impl Eq for LabelData {}

impl Ord for LabelData {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // The separator is the lowest symbol, which is what makes
            // an in-order walk of the tree come out lexicographically sorted
            (Self::Byte(b1), Self::Byte(b2)) => b1.cmp(b2),
            (Self::Sep, Self::Sep) => Ordering::Equal,
            (Self::Byte(_), Self::Sep) => Ordering::Greater,
            (Self::Sep, Self::Byte(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for LabelData {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for LabelData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Byte(b) => write!(f, "{:?}", *b as char),
            Self::Sep => write!(f, "Sep"),
        }
    }
}
