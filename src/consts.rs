//======================================================================
// src/consts.rs
// Ascon parameters: initial values, round constants, rates.
//======================================================================

/// Number of 64-bit words in the permutation state.
pub const STATE_WORDS: usize = 5;

/// The 320-bit Ascon state, `x0..x4`.
pub type State = [u64; STATE_WORDS];

/// Rounds of the initialization/finalization permutation `p^a`.
pub const PA_ROUNDS: usize = 12;
/// Rounds of the AEAD data-processing permutation `p^b`.
pub const PB_ROUNDS: usize = 8;

/// Round constants of `p^12`; `p^r` uses the last `r` entries.
pub const RC: [u64; 12] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Domain separation bit, the last bit of the state.
pub const DSEP: u64 = 1 << 63;

/// Packs algorithm parameters into an initial value: algorithm id in byte 0,
/// round counts `a | b << 4` in byte 2, output length in bits from bit 24,
/// rate in bytes in byte 5 and an extra parameter byte in byte 6.
pub(crate) const fn iv(id: u8, a: u8, b: u8, out_bits: u16, rate: u8, extra: u8) -> u64 {
    id as u64
        | ((a as u64 | (b as u64) << 4) << 16)
        | ((out_bits as u64) << 24)
        | ((rate as u64) << 40)
        | ((extra as u64) << 48)
}

// --- Ascon-AEAD128 ---
pub const AEAD128_IV: u64 = iv(1, 12, 8, 128, 16, 0);
pub const AEAD_RATE_BYTES: usize = 16;
pub const KEY_BYTES: usize = 16;
pub const NONCE_BYTES: usize = 16;
pub const TAG_BYTES: usize = 16;

// --- Hash family ---
pub const HASH256_IV: u64 = iv(2, 12, 12, 256, 8, 0);
pub const XOF128_IV: u64 = iv(3, 12, 12, 0, 8, 0);
pub const CXOF128_IV: u64 = iv(4, 12, 12, 0, 8, 0);
pub const HASH_RATE_BYTES: usize = 8;
pub const HASH256_OUT_BYTES: usize = 32;
/// Longest customization string accepted by Ascon-CXOF128 (2048 bits).
pub const CXOF_MAX_CUSTOM_BYTES: usize = 256;

// --- Keyed family (v1.3) ---
pub const PRF_IN_RATE_BYTES: usize = 32;
pub const PRF_OUT_RATE_BYTES: usize = 16;
/// The extra byte carries the squeezing rate.
pub const MAC_IV: u64 = iv(5, 12, 12, 128, PRF_IN_RATE_BYTES as u8, PRF_OUT_RATE_BYTES as u8);
pub const PRF_IV: u64 = iv(6, 12, 12, 0, PRF_IN_RATE_BYTES as u8, PRF_OUT_RATE_BYTES as u8);
/// The rate byte is left clear; it receives the input length in bits.
pub const PRFS_IV: u64 = iv(7, 12, 12, 128, 0, 0);
/// Bit offset of the PRFshort input length inside the initial value.
pub const PRFS_LEN_SHIFT: u32 = 40;
/// Longest input accepted by Ascon-PRFshort.
pub const PRFS_MAX_INPUT_BYTES: usize = 16;

/// Padding word for a partial block of `len` bytes (`len < 8`).
#[inline(always)]
pub(crate) const fn pad(len: usize) -> u64 {
    0x01 << (8 * len)
}
