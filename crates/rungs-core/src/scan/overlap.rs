// crates/rungs-core/src/scan/overlap.rs
//
// Overlap resolution across window sizes.
//
// Sizes are admitted largest first. Each admitted batch claims the index
// ranges [start, start+size) of its surviving matches; a later (smaller)
// match whose range intersects any claimed range is dropped. Matches inside
// one batch never suppress each other.

use crate::scan::Match;

/// Half-open ranges [a, a+la) and [c, c+lc) share at least one index.
#[inline]
pub fn ranges_intersect(a: usize, la: usize, c: usize, lc: usize) -> bool {
    a.max(c) < (a + la).min(c + lc)
}

#[derive(Clone, Debug, Default)]
pub struct OverlapResolver {
    claimed: Vec<(usize, usize)>,
}

impl OverlapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, start: usize, size: usize) -> bool {
        self.claimed
            .iter()
            .any(|&(c, lc)| ranges_intersect(start, size, c, lc))
    }

    /// Filter one batch against the ranges claimed so far, then claim what survives.
    pub fn admit(&mut self, batch: Vec<Match>) -> Vec<Match> {
        let kept: Vec<Match> = batch
            .into_iter()
            .filter(|m| !self.is_claimed(m.start, m.size))
            .collect();
        self.claimed.extend(kept.iter().map(|m| (m.start, m.size)));
        kept
    }

    pub fn claimed(&self) -> &[(usize, usize)] {
        &self.claimed
    }
}
