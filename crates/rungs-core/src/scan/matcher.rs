// crates/rungs-core/src/scan/matcher.rs
//
// Exact window matcher.
//
// Query window = the newest `size` symbols, seq[len-size..].
// A start index i is a match when
//   - i in [0, len-size)          (the query's own position len-size is excluded)
//   - T(query) == seq[i..i+size]  (structural symbol equality)
//   - the candidate index (i-1 or i+size, per T's candidate side) is in [0, len)
//
// Naive O((len-size) * size) scan.

use std::ops::Range;

use serde::Serialize;
use tracing::{debug, trace};

use crate::symbol::Symbol;
use crate::transform::{CandidateSide, Transform};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Match {
    pub transform: Transform,
    pub start: usize,
    pub size: usize,
}

impl Match {
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.size
    }

    /// Index of the adjacent candidate, if it lies inside a sequence of `len`.
    pub fn candidate_index(&self, len: usize) -> Option<usize> {
        let idx = match self.transform.candidate_side() {
            CandidateSide::Predecessor => self.start.checked_sub(1)?,
            CandidateSide::Successor => self.start + self.size,
        };
        (idx < len).then_some(idx)
    }

    pub fn candidate(&self, seq: &[Symbol]) -> Option<Symbol> {
        self.candidate_index(seq.len()).map(|i| seq[i])
    }
}

/// The newest `size` symbols, or None when fewer than `size + 1` are available.
pub fn query_window(seq: &[Symbol], size: usize) -> Option<&[Symbol]> {
    if size == 0 || seq.len() < size + 1 {
        return None;
    }
    Some(&seq[seq.len() - size..])
}

pub fn find_matches(seq: &[Symbol], size: usize, transform: Transform) -> Vec<Match> {
    let Some(query) = query_window(seq, size) else {
        return Vec::new();
    };
    let target = transform.apply(query);
    let last_start = seq.len() - size;

    let mut out = Vec::new();
    for start in 0..last_start {
        if seq[start..start + size] != target[..] {
            continue;
        }
        let m = Match {
            transform,
            start,
            size,
        };
        if m.candidate_index(seq.len()).is_none() {
            trace!(start, size, %transform, "match dropped: candidate out of range");
            continue;
        }
        out.push(m);
    }

    debug!(size, %transform, matches = out.len(), "window scan");
    out
}
