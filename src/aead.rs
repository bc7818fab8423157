//======================================================================
// src/aead.rs
// Ascon-AEAD128 (NIST SP 800-232).
//
// Duplex construction over a 128-bit rate: the key/nonce initialization
// and the finalization run `p^12`, data blocks run `p^8`.
//======================================================================

use aead::{
    consts::{U0, U16},
    AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends;
use crate::bytes::{clear_from, load, store};
use crate::consts::{State, AEAD128_IV, AEAD_RATE_BYTES, DSEP, PA_ROUNDS, PB_ROUNDS, TAG_BYTES};

/// Ascon-AEAD128 cipher: 128-bit key, nonce and tag.
///
/// A nonce must never be reused under the same key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AsconAead128 {
    key: [u64; 2],
}

impl KeySizeUser for AsconAead128 {
    type KeySize = U16;
}

impl KeyInit for AsconAead128 {
    fn new(key: &Key<Self>) -> Self {
        Self {
            key: [load(&key[..8]), load(&key[8..])],
        }
    }
}

impl AeadCore for AsconAead128 {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for AsconAead128 {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let mut state = self.initialize(nonce);
        absorb_associated_data(&mut state, associated_data);

        let mut blocks = buffer.chunks_exact_mut(AEAD_RATE_BYTES);
        for block in &mut blocks {
            let (lo, hi) = block.split_at_mut(8);
            state[0] ^= load(lo);
            state[1] ^= load(hi);
            store(state[0], lo);
            store(state[1], hi);
            backends::permutation(&mut state, PB_ROUNDS);
        }

        // Final (possibly empty) block: encrypt and pad, no permutation.
        let tail = blocks.into_remainder();
        let len = tail.len();
        let (lo, hi) = tail.split_at_mut(len.min(8));
        state[0] ^= load(lo);
        state[1] ^= load(hi);
        store(state[0], lo);
        store(state[1], hi);
        pad_block(&mut state, len);

        let tag = self.finalize(&mut state);
        state.zeroize();
        Ok(Tag::<Self>::clone_from_slice(&tag))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let mut state = self.initialize(nonce);
        absorb_associated_data(&mut state, associated_data);

        let mut blocks = buffer.chunks_exact_mut(AEAD_RATE_BYTES);
        for block in &mut blocks {
            let (lo, hi) = block.split_at_mut(8);
            decrypt_lane(&mut state[0], lo);
            decrypt_lane(&mut state[1], hi);
            backends::permutation(&mut state, PB_ROUNDS);
        }

        let tail = blocks.into_remainder();
        let len = tail.len();
        let (lo, hi) = tail.split_at_mut(len.min(8));
        decrypt_lane(&mut state[0], lo);
        decrypt_lane(&mut state[1], hi);
        pad_block(&mut state, len);

        let expected = self.finalize(&mut state);
        state.zeroize();

        if bool::from(expected.ct_eq(tag.as_slice())) {
            Ok(())
        } else {
            // Never release unauthenticated plaintext.
            buffer.zeroize();
            Err(aead::Error)
        }
    }
}

impl AsconAead128 {
    fn initialize(&self, nonce: &Nonce<Self>) -> State {
        let mut state = [
            AEAD128_IV,
            self.key[0],
            self.key[1],
            load(&nonce[..8]),
            load(&nonce[8..]),
        ];
        backends::permutation(&mut state, PA_ROUNDS);
        state[3] ^= self.key[0];
        state[4] ^= self.key[1];
        state
    }

    fn finalize(&self, state: &mut State) -> [u8; TAG_BYTES] {
        state[2] ^= self.key[0];
        state[3] ^= self.key[1];
        backends::permutation(state, PA_ROUNDS);

        let mut tag = [0u8; TAG_BYTES];
        store(state[3] ^ self.key[0], &mut tag[..8]);
        store(state[4] ^ self.key[1], &mut tag[8..]);
        tag
    }
}

/// Absorbs the associated data (skipped entirely when empty), then applies
/// the domain separation bit.
fn absorb_associated_data(state: &mut State, data: &[u8]) {
    if !data.is_empty() {
        let mut blocks = data.chunks_exact(AEAD_RATE_BYTES);
        for block in &mut blocks {
            state[0] ^= load(&block[..8]);
            state[1] ^= load(&block[8..]);
            backends::permutation(state, PB_ROUNDS);
        }

        let tail = blocks.remainder();
        let (lo, hi) = tail.split_at(tail.len().min(8));
        state[0] ^= load(lo);
        state[1] ^= load(hi);
        pad_block(state, tail.len());
        backends::permutation(state, PB_ROUNDS);
    }
    state[4] ^= DSEP;
}

/// XORs the `0x01` padding byte right after `len` bytes of the rate.
#[inline(always)]
fn pad_block(state: &mut State, len: usize) {
    debug_assert!(len < AEAD_RATE_BYTES);
    if len < 8 {
        state[0] ^= crate::consts::pad(len);
    } else {
        state[1] ^= crate::consts::pad(len - 8);
    }
}

/// Decrypts up to eight bytes in place and replaces the matching state
/// bytes with the ciphertext.
#[inline(always)]
fn decrypt_lane(lane: &mut u64, bytes: &mut [u8]) {
    let plain = *lane ^ load(bytes);
    store(plain, bytes);
    *lane ^= clear_from(plain, bytes.len());
}
