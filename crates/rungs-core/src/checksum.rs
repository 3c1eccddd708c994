// crates/rungs-core/src/checksum.rs

use crate::symbol::Symbol;

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    truncate16(&blake3::hash(bytes))
}

fn truncate16(hash: &blake3::Hash) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

/// Stable id of a canonical sequence: blake3 over the canonical strings,
/// newline-terminated, oldest first.
pub fn history_id(seq: &[Symbol]) -> [u8; 16] {
    let mut h = blake3::Hasher::new();
    for s in seq {
        h.update(s.canonical().as_bytes());
        h.update(b"\n");
    }
    truncate16(&h.finalize())
}

pub fn hex16(id: &[u8; 16]) -> String {
    id.iter().map(|b| format!("{b:02x}")).collect()
}
