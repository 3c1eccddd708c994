// crates/rungs-core/src/transform/registry.rs

use crate::error::Result;
use crate::transform::{Transform, TransformKind};

/// Ordered, duplicate-free set of transforms a scan runs under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformRegistry {
    entries: Vec<Transform>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl TransformRegistry {
    /// identity, full-flip, start-flip, parity-flip.
    pub fn standard() -> Self {
        Self {
            entries: TransformKind::ALL.iter().copied().map(Transform::new).collect(),
        }
    }

    /// Every entry plus its reversed counterpart (forward entries first).
    pub fn with_reversed(&self) -> Self {
        let mut out = self.clone();
        for t in &self.entries {
            out.push(t.reversed());
        }
        out
    }

    pub fn from_transforms<I: IntoIterator<Item = Transform>>(it: I) -> Self {
        let mut out = Self { entries: Vec::new() };
        for t in it {
            out.push(t);
        }
        out
    }

    /// Resolve names in the order given. Unknown names are an error.
    pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut out = Self { entries: Vec::new() };
        for n in names {
            out.push(n.as_ref().parse()?);
        }
        Ok(out)
    }

    fn push(&mut self, t: Transform) {
        if !self.entries.contains(&t) {
            self.entries.push(t);
        }
    }

    pub fn get(&self, name: &str) -> Option<Transform> {
        let t: Transform = name.parse().ok()?;
        self.entries.iter().copied().find(|e| *e == t)
    }

    pub fn iter(&self) -> impl Iterator<Item = Transform> + '_ {
        self.entries.iter().copied()
    }

    pub fn as_slice(&self) -> &[Transform] {
        &self.entries
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(Transform::name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
