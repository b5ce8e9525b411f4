//! Deterministic phrase selection
//!
//! index = first 8 bytes of SHA-256(source ‖ salt), big-endian, mod pool length.
//! Same source + salt always picks the same entry; different salts pick
//! independently. No seed or counter state.

use sha2::{Digest, Sha256};

/// Index into a pool of `len` entries. `len` must be non-zero.
pub fn select_index(source: &str, salt: &str, len: usize) -> usize {
    debug_assert!(len > 0, "phrase pool for salt '{}' is empty", salt);
    if len <= 1 {
        return 0;
    }

    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[0..8]);
    (u64::from_be_bytes(prefix) % len as u64) as usize
}

/// Pick one entry of a fixed pool
pub fn select<const N: usize>(pool: &[&'static str; N], salt: &str, source: &str) -> &'static str {
    pool[select_index(source, salt, N)]
}
