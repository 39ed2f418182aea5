//! ENS name hashing (EIP-137).
//!
//! ```text
//! namehash("")           = 0x00 * 32
//! namehash(label.parent) = keccak256(namehash(parent) ++ keccak256(label))
//! ```

use sha3::{Digest, Keccak256};

pub type Node = [u8; 32];

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(data));
    out
}

/// Labels are ASCII-lowercased; empty labels are skipped.
pub fn namehash(name: &str) -> Node {
    let mut node = [0u8; 32];

    for label in name.rsplit('.').filter(|label| !label.is_empty()) {
        let label_hash = keccak256(label.to_ascii_lowercase().as_bytes());

        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(&node);
        buf[32..].copy_from_slice(&label_hash);
        node = keccak256(&buf);
    }

    node
}
