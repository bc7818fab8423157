//======================================================================
// src/bytes.rs
// Little-endian lane loading and storing.
//======================================================================

/// Loads up to eight bytes as a little-endian lane; missing bytes are zero.
#[inline(always)]
pub(crate) fn load(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Stores the low `out.len()` bytes of `word`, little-endian.
#[inline(always)]
pub(crate) fn store(word: u64, out: &mut [u8]) {
    out.copy_from_slice(&word.to_le_bytes()[..out.len()]);
}

/// Keeps the low `len` bytes of `word` and clears the rest.
#[inline(always)]
pub(crate) fn clear_from(word: u64, len: usize) -> u64 {
    match len {
        0 => 0,
        8.. => word,
        _ => word & ((1u64 << (8 * len)) - 1),
    }
}
