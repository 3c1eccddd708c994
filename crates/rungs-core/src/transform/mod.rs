// crates/rungs-core/src/transform/mod.rs
//
// Symmetry transforms over windows.
//
// Base kinds (element-wise bit flips):
//   identity     no change
//   full-flip    side and parity flipped on every element
//   start-flip   side flipped on the first element only
//   parity-flip  parity flipped on every element
//
// `Transform::reversed()` is the second-order combinator:
//   reversed(T)(w) = T(reverse(w))
// so reversed(reversed(T)) == T and the set stays closed under composition.
// rotate180 is reversed(full-flip).
//
// Candidate side: forward transforms read the element before a match
// (predecessor); reversed transforms read the element after it (successor).
//
// No transform touches line_count.

pub mod registry;

pub use registry::TransformRegistry;

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, RungsError};
use crate::symbol::Symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformKind {
    Identity,
    FullFlip,
    StartFlip,
    ParityFlip,
}

impl TransformKind {
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Identity,
        TransformKind::FullFlip,
        TransformKind::StartFlip,
        TransformKind::ParityFlip,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Identity => "identity",
            TransformKind::FullFlip => "full-flip",
            TransformKind::StartFlip => "start-flip",
            TransformKind::ParityFlip => "parity-flip",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "id" => Some(TransformKind::Identity),
            "full-flip" | "fullflip" | "symmetric" => Some(TransformKind::FullFlip),
            "start-flip" | "startflip" => Some(TransformKind::StartFlip),
            "parity-flip" | "parityflip" => Some(TransformKind::ParityFlip),
            _ => None,
        }
    }

    fn apply_in_place(self, w: &mut [Symbol]) {
        match self {
            TransformKind::Identity => {}
            TransformKind::FullFlip => {
                for s in w.iter_mut() {
                    *s = s.with_side(s.side().flip()).with_parity(s.parity().flip());
                }
            }
            TransformKind::StartFlip => {
                if let Some(s) = w.first_mut() {
                    *s = s.with_side(s.side().flip());
                }
            }
            TransformKind::ParityFlip => {
                for s in w.iter_mut() {
                    *s = s.with_parity(s.parity().flip());
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateSide {
    /// seq[start - 1]
    Predecessor,
    /// seq[start + size]
    Successor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Transform {
    kind: TransformKind,
    reversed: bool,
}

impl Transform {
    pub const IDENTITY: Transform = Transform::new(TransformKind::Identity);
    pub const FULL_FLIP: Transform = Transform::new(TransformKind::FullFlip);
    pub const START_FLIP: Transform = Transform::new(TransformKind::StartFlip);
    pub const PARITY_FLIP: Transform = Transform::new(TransformKind::ParityFlip);

    pub const fn new(kind: TransformKind) -> Self {
        Self {
            kind,
            reversed: false,
        }
    }

    pub const fn rotate180() -> Self {
        Self::FULL_FLIP.reversed()
    }

    /// reversed(T)(w) = T(reverse(w)). Applying twice yields T again.
    pub const fn reversed(self) -> Self {
        Self {
            kind: self.kind,
            reversed: !self.reversed,
        }
    }

    #[inline]
    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn candidate_side(&self) -> CandidateSide {
        if self.reversed {
            CandidateSide::Successor
        } else {
            CandidateSide::Predecessor
        }
    }

    /// Whether T(T(w)) == w for every window.
    /// Reversal commutes with element-wise flips but not with start-flip.
    pub fn is_involution(&self) -> bool {
        !(self.reversed && self.kind == TransformKind::StartFlip)
    }

    pub fn name(&self) -> String {
        match (self.kind, self.reversed) {
            (k, false) => k.name().to_string(),
            (TransformKind::FullFlip, true) => "rotate180".to_string(),
            (k, true) => format!("{}-reversed", k.name()),
        }
    }

    pub fn apply(&self, window: &[Symbol]) -> Vec<Symbol> {
        let mut out = window.to_vec();
        if self.reversed {
            out.reverse();
        }
        self.kind.apply_in_place(&mut out);
        out
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Transform {
    type Err = RungsError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim().to_ascii_lowercase();
        if t == "rotate180" {
            return Ok(Transform::rotate180());
        }
        if let Some(base) = t.strip_suffix("-reversed") {
            return TransformKind::parse(base)
                .map(|k| Transform::new(k).reversed())
                .ok_or_else(|| RungsError::UnknownTransform(s.to_string()));
        }
        TransformKind::parse(&t)
            .map(Transform::new)
            .ok_or_else(|| RungsError::UnknownTransform(s.to_string()))
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}
