//======================================================================
// src/backends/soft.rs
// Compact 64-bit backend (`ref`, `opt64_lowsize`): one round body, looped.
//======================================================================

use crate::consts::{State, RC};

/// A single Ascon round with round constant `c`.
#[inline(always)]
pub(crate) fn round(s: &mut State, c: u64) {
    // Constant addition.
    s[2] ^= c;

    // Substitution layer.
    s[0] ^= s[4];
    s[4] ^= s[3];
    s[2] ^= s[1];
    let t0 = !s[0] & s[1];
    let t1 = !s[1] & s[2];
    let t2 = !s[2] & s[3];
    let t3 = !s[3] & s[4];
    let t4 = !s[4] & s[0];
    s[0] ^= t1;
    s[1] ^= t2;
    s[2] ^= t3;
    s[3] ^= t4;
    s[4] ^= t0;
    s[1] ^= s[0];
    s[0] ^= s[4];
    s[3] ^= s[2];
    s[2] = !s[2];

    // Linear diffusion layer.
    s[0] ^= s[0].rotate_right(19) ^ s[0].rotate_right(28);
    s[1] ^= s[1].rotate_right(61) ^ s[1].rotate_right(39);
    s[2] ^= s[2].rotate_right(1) ^ s[2].rotate_right(6);
    s[3] ^= s[3].rotate_right(10) ^ s[3].rotate_right(17);
    s[4] ^= s[4].rotate_right(7) ^ s[4].rotate_right(41);
}

/// The permutation `p^rounds`.
#[inline]
pub(crate) fn permutation(state: &mut State, rounds: usize) {
    debug_assert!((1..=RC.len()).contains(&rounds));
    for &c in &RC[RC.len() - rounds..] {
        round(state, c);
    }
}
