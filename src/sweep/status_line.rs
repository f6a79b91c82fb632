//! The status line: currently-active left events ordered by the segment
//! comparator (§4.6).
//!
//! Grounded on `sweep::active::VecSet` in the teacher crate (a sorted `Vec`
//! with binary-search insert/remove) — the spec explicitly allows this
//! concrete realisation ("sorted array with binary search (worst-case O(n)
//! per op but simpler)"), and it avoids the unsafe interior-mutability
//! tricks the teacher's `BTreeSet`-based variant needs to expose O(1)
//! neighbour access.

use super::event::EventKey;
use super::event::EventId;
use super::segment_cmp::compare_segments;

/// Sorted (bottom-to-top) set of active segments, keyed by the left event
/// that introduced them.
#[derive(Debug, Default)]
pub struct StatusLine {
    entries: Vec<(EventId, EventKey)>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn id_at(&self, index: usize) -> EventId {
        self.entries[index].0
    }

    /// Insert `id` (with snapshot `key`) and return its index.
    pub fn insert(&mut self, id: EventId, key: EventKey) -> usize {
        let index = self
            .entries
            .partition_point(|(_, k)| compare_segments(k, &key) == std::cmp::Ordering::Less);
        self.entries.insert(index, (id, key));
        index
    }

    /// Remove the entry at `index`.
    pub fn remove(&mut self, index: usize) -> EventId {
        self.entries.remove(index).0
    }

    pub fn prev(&self, index: usize) -> Option<usize> {
        index.checked_sub(1)
    }

    pub fn next(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.entries.len()).then_some(next)
    }

    /// Every (index, id) pair at or after `from`, i.e. the set of entries
    /// whose index may have shifted after an `insert`/`remove` at `from`.
    /// The caller uses this to refresh each event's `pos_sl` field (§3).
    pub fn ids_from(&self, from: usize) -> impl Iterator<Item = (usize, EventId)> + '_ {
        self.entries[from.min(self.entries.len())..]
            .iter()
            .enumerate()
            .map(move |(i, &(id, _))| (from + i, id))
    }
}
