//======================================================================
// src/backends/unrolled.rs
// Speed-oriented 64-bit backend (`opt64`): fixed round schedules unrolled.
//======================================================================

use super::soft::round;
use crate::consts::State;

/// The permutation `p^rounds`, unrolled for the round counts Ascon uses.
#[inline]
pub(crate) fn permutation(state: &mut State, rounds: usize) {
    match rounds {
        12 => {
            round(state, 0xf0);
            round(state, 0xe1);
            round(state, 0xd2);
            round(state, 0xc3);
            p8(state);
        }
        8 => p8(state),
        6 => p6(state),
        _ => super::soft::permutation(state, rounds),
    }
}

#[inline(always)]
fn p8(state: &mut State) {
    round(state, 0xb4);
    round(state, 0xa5);
    p6(state);
}

#[inline(always)]
fn p6(state: &mut State) {
    round(state, 0x96);
    round(state, 0x87);
    round(state, 0x78);
    round(state, 0x69);
    round(state, 0x5a);
    round(state, 0x4b);
}
