use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The end position shared by every leaf edge.
///
/// Leaves hold a handle to the same cell instead of a copy of the value,
/// so advancing the marker once lengthens every leaf edge at the same time.
/// The value is exclusive: after `k` calls to [`advance`](EndMarker::advance)
/// a leaf starting at `s` carries the label `string[s..k]`.
///
/// Only the builder ever advances it. An atomic cell is used rather than a
/// `Cell` so that a finished tree can be shared between readers.
#[derive(Debug, Default)]
pub struct EndMarker(Arc<AtomicUsize>);

impl EndMarker {
    pub fn new() -> Self {
        EndMarker(Arc::new(AtomicUsize::new(0)))
    }

    pub fn advance(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn value(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    /// Another handle to the same cell.
    pub fn share(&self) -> Self {
        EndMarker(Arc::clone(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_seen_by_every_handle() {
        let end = EndMarker::new();
        let leaves: Vec<EndMarker> = (0..4).map(|_| end.share()).collect();

        end.advance();
        end.advance();

        assert_eq!(end.value(), 2);
        assert!(leaves.iter().all(|l| l.value() == 2));
    }
}
