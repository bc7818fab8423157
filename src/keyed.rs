//======================================================================
// src/keyed.rs
// Keyed Ascon sponges: Ascon-MAC, Ascon-PRF and Ascon-PRFshort (v1.3).
//======================================================================

use core::fmt;
use core::marker::PhantomData;

use digest::{
    block_buffer::Eager,
    consts::{U16, U32},
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        ExtendableOutputCore, FixedOutputCore, OutputSizeUser, UpdateCore, XofReaderCore,
        XofReaderCoreWrapper,
    },
    MacMarker, Output, Reset,
};
use aead::{Key, KeyInit, KeySizeUser};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends;
use crate::bytes::{load, store};
use crate::consts::{
    pad, State, DSEP, PA_ROUNDS, PRFS_IV, PRFS_LEN_SHIFT, PRFS_MAX_INPUT_BYTES,
    PRF_IN_RATE_BYTES, PRF_OUT_RATE_BYTES, TAG_BYTES,
};
use crate::error::{Error, Result};
use crate::variant::{KeyedVariant, MacV13, PrfV13};

//======================================================================
// KeyedCore - absorbing phase shared by MAC and PRF
//======================================================================

/// Keyed sponge engine. Use it through [`AsconMac`](crate::AsconMac) or
/// [`AsconPrf`](crate::AsconPrf).
#[derive(Clone)]
pub struct KeyedCore<V: KeyedVariant> {
    state: State,
    initial_state: State,
    _variant: PhantomData<V>,
}

impl<V: KeyedVariant> KeyedCore<V> {
    #[inline(always)]
    fn absorb_block(&mut self, block: &[u8]) {
        for (lane, bytes) in self.state.iter_mut().zip(block.chunks(8)) {
            *lane ^= load(bytes);
        }
        backends::permutation(&mut self.state, PA_ROUNDS);
    }

    fn finish(&mut self, buffer: &mut Buffer<Self>) -> KeyedReader {
        let tail = buffer.get_data();
        for (lane, bytes) in self.state.iter_mut().zip(tail.chunks(8)) {
            *lane ^= load(bytes);
        }
        self.state[tail.len() / 8] ^= pad(tail.len() % 8);
        self.state[4] ^= DSEP;
        backends::permutation(&mut self.state, PA_ROUNDS);
        KeyedReader { state: self.state }
    }
}

impl<V: KeyedVariant> KeySizeUser for KeyedCore<V> {
    type KeySize = U16;
}

impl<V: KeyedVariant> KeyInit for KeyedCore<V> {
    fn new(key: &Key<Self>) -> Self {
        let mut state = [V::IV, load(&key[..8]), load(&key[8..]), 0, 0];
        backends::permutation(&mut state, PA_ROUNDS);
        Self {
            state,
            initial_state: state,
            _variant: PhantomData,
        }
    }
}

impl<V: KeyedVariant> BlockSizeUser for KeyedCore<V> {
    type BlockSize = U32;
}

impl<V: KeyedVariant> BufferKindUser for KeyedCore<V> {
    type BufferKind = Eager;
}

impl<V: KeyedVariant> UpdateCore for KeyedCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            debug_assert_eq!(block.len(), PRF_IN_RATE_BYTES);
            self.absorb_block(block);
        }
    }
}

impl<V: KeyedVariant> Reset for KeyedCore<V> {
    fn reset(&mut self) {
        self.state = self.initial_state;
    }
}

impl<V: KeyedVariant> AlgorithmName for KeyedCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)
    }
}

impl<V: KeyedVariant> fmt::Debug for KeyedCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ... }}", V::NAME)
    }
}

impl<V: KeyedVariant> Drop for KeyedCore<V> {
    fn drop(&mut self) {
        self.state.zeroize();
        self.initial_state.zeroize();
    }
}

impl<V: KeyedVariant> ZeroizeOnDrop for KeyedCore<V> {}

// --- MAC: fixed 128-bit tag ---

impl MacMarker for KeyedCore<MacV13> {}

impl OutputSizeUser for KeyedCore<MacV13> {
    type OutputSize = U16;
}

impl FixedOutputCore for KeyedCore<MacV13> {
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let mut reader = self.finish(buffer);
        out.copy_from_slice(&reader.read_block());
    }
}

// --- PRF: arbitrary-length output ---

impl ExtendableOutputCore for KeyedCore<PrfV13> {
    type ReaderCore = KeyedReader;

    #[inline]
    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        self.finish(buffer)
    }
}

//======================================================================
// KeyedReader - squeezing phase
//======================================================================

/// Squeezes 128-bit blocks out of a finalized keyed sponge.
#[derive(Clone)]
pub struct KeyedReader {
    state: State,
}

impl BlockSizeUser for KeyedReader {
    type BlockSize = U16;
}

impl XofReaderCore for KeyedReader {
    #[inline]
    fn read_block(&mut self) -> Block<Self> {
        let mut block = Block::<Self>::default();
        debug_assert_eq!(block.len(), PRF_OUT_RATE_BYTES);
        store(self.state[0], &mut block[..8]);
        store(self.state[1], &mut block[8..]);
        backends::permutation(&mut self.state, PA_ROUNDS);
        block
    }
}

impl Drop for KeyedReader {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl ZeroizeOnDrop for KeyedReader {}

/// Ascon-MAC with a 128-bit key and tag; use through `digest::Mac`.
pub type AsconMac = CoreWrapper<KeyedCore<MacV13>>;

/// Ascon-PRF with a 128-bit key; use through `KeyInit` + `ExtendableOutput`.
pub type AsconPrf = CoreWrapper<KeyedCore<PrfV13>>;

/// Output stream of [`AsconPrf`].
pub type PrfOutput = XofReaderCoreWrapper<KeyedReader>;

//======================================================================
// PRFshort - single permutation call for inputs up to 128 bits
//======================================================================

/// Ascon-PRFshort: a keyed function on inputs of at most 16 bytes, computed
/// with one `p^12` call.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AsconPrfShort {
    key: [u64; 2],
}

impl KeySizeUser for AsconPrfShort {
    type KeySize = U16;
}

impl KeyInit for AsconPrfShort {
    fn new(key: &Key<Self>) -> Self {
        Self {
            key: [load(&key[..8]), load(&key[8..])],
        }
    }
}

impl AsconPrfShort {
    /// Computes the 128-bit output for `input`.
    pub fn compute(&self, input: &[u8]) -> Result<[u8; TAG_BYTES]> {
        if input.len() > PRFS_MAX_INPUT_BYTES {
            return Err(Error::InputTooLong);
        }

        let (lo, hi) = input.split_at(input.len().min(8));
        let bit_len = 8 * input.len() as u64;
        let mut state = [
            PRFS_IV | (bit_len << PRFS_LEN_SHIFT),
            self.key[0],
            self.key[1],
            load(lo),
            load(hi),
        ];
        backends::permutation(&mut state, PA_ROUNDS);

        let mut out = [0u8; TAG_BYTES];
        store(state[3] ^ self.key[0], &mut out[..8]);
        store(state[4] ^ self.key[1], &mut out[8..]);
        state.zeroize();
        Ok(out)
    }

    /// Recomputes the output for `input` and compares it with `tag` in
    /// constant time.
    pub fn verify(&self, input: &[u8], tag: &[u8]) -> Result<()> {
        let mut expected = self.compute(input)?;
        let equal = bool::from(expected.ct_eq(tag));
        expected.zeroize();
        if equal {
            Ok(())
        } else {
            Err(Error::TagMismatch)
        }
    }
}
