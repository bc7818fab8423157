//======================================================================
// src/backends/bi32.rs
// 32-bit bit-interleaved backend (`bi32`).
//
// Every 64-bit lane is split into its even bits and its odd bits, so that a
// 64-bit rotation becomes two 32-bit rotations. Suited to 32-bit targets.
//======================================================================

use crate::consts::{State, RC, STATE_WORDS};

/// A lane in interleaved form: `(even bits, odd bits)`.
type Lane = (u32, u32);

/// Gathers the even-indexed bits of `x` into a `u32`.
const fn gather_even(mut x: u64) -> u32 {
    x &= 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
    x = (x | (x >> 16)) & 0x0000_0000_ffff_ffff;
    x as u32
}

/// Inverse of [`gather_even`]: places the bits of `x` at even positions.
const fn scatter_even(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

#[inline]
pub(crate) const fn interleave(x: u64) -> Lane {
    (gather_even(x), gather_even(x >> 1))
}

#[inline]
pub(crate) const fn deinterleave(lane: Lane) -> u64 {
    scatter_even(lane.0) | (scatter_even(lane.1) << 1)
}

const RC_BI: [Lane; 12] = {
    let mut out = [(0u32, 0u32); 12];
    let mut i = 0;
    while i < RC.len() {
        out[i] = interleave(RC[i]);
        i += 1;
    }
    out
};

/// 64-bit rotate right by `r`, expressed on interleaved halves.
#[inline(always)]
fn ror(x: Lane, r: u32) -> Lane {
    let k = r / 2;
    if r % 2 == 0 {
        (x.0.rotate_right(k), x.1.rotate_right(k))
    } else {
        (x.1.rotate_right(k), x.0.rotate_right(k + 1))
    }
}

#[inline(always)]
fn sbox(x: &mut [u32; STATE_WORDS]) {
    x[0] ^= x[4];
    x[4] ^= x[3];
    x[2] ^= x[1];
    let t0 = !x[0] & x[1];
    let t1 = !x[1] & x[2];
    let t2 = !x[2] & x[3];
    let t3 = !x[3] & x[4];
    let t4 = !x[4] & x[0];
    x[0] ^= t1;
    x[1] ^= t2;
    x[2] ^= t3;
    x[3] ^= t4;
    x[4] ^= t0;
    x[1] ^= x[0];
    x[0] ^= x[4];
    x[3] ^= x[2];
    x[2] = !x[2];
}

#[inline(always)]
fn diffuse(e: &mut [u32; STATE_WORDS], o: &mut [u32; STATE_WORDS]) {
    const ROT: [(u32, u32); STATE_WORDS] = [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];
    for (i, &(r1, r2)) in ROT.iter().enumerate() {
        let x = (e[i], o[i]);
        let a = ror(x, r1);
        let b = ror(x, r2);
        e[i] ^= a.0 ^ b.0;
        o[i] ^= a.1 ^ b.1;
    }
}

/// The permutation `p^rounds`.
pub(crate) fn permutation(state: &mut State, rounds: usize) {
    debug_assert!((1..=RC_BI.len()).contains(&rounds));

    let mut e = [0u32; STATE_WORDS];
    let mut o = [0u32; STATE_WORDS];
    for (i, &word) in state.iter().enumerate() {
        (e[i], o[i]) = interleave(word);
    }

    for &(ce, co) in &RC_BI[RC_BI.len() - rounds..] {
        e[2] ^= ce;
        o[2] ^= co;
        sbox(&mut e);
        sbox(&mut o);
        diffuse(&mut e, &mut o);
    }

    for (i, word) in state.iter_mut().enumerate() {
        *word = deinterleave((e[i], o[i]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleave_roundtrip() {
        for x in [0u64, 1, 2, 0x8000_0000_0000_0000, 0x0123_4567_89ab_cdef, u64::MAX] {
            assert_eq!(deinterleave(interleave(x)), x);
        }
    }

    #[test]
    fn interleaved_rotation_matches_native() {
        let x = 0x0123_4567_89ab_cdefu64;
        for r in 1..64 {
            assert_eq!(deinterleave(ror(interleave(x), r)), x.rotate_right(r), "r = {r}");
        }
    }
}
