//======================================================================
// src/sponge.rs
// Ascon-Hash256, Ascon-XOF128 and Ascon-CXOF128 on the `digest` core API.
// `HashCore` holds the absorbing state; `CoreWrapper` adds buffering and
// the user-facing `Digest` / `ExtendableOutput` traits.
//======================================================================

use core::fmt;
use core::marker::PhantomData;

use digest::{
    block_buffer::Eager,
    consts::U8,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        ExtendableOutputCore, FixedOutputCore, OutputSizeUser, UpdateCore, XofReaderCore,
        XofReaderCoreWrapper,
    },
    ExtendableOutput, FixedOutput, HashMarker, Output, Reset, Update, XofReader,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::backends;
use crate::bytes::load;
use crate::consts::{
    pad, State, CXOF_MAX_CUSTOM_BYTES, HASH256_OUT_BYTES, HASH_RATE_BYTES, PA_ROUNDS,
};
use crate::error::{Error, Result};
use crate::variant::{Cxof128, FixedHashVariant, Hash256, HashVariant, Xof128};

/// Marker for hash variants that may be finalized into an XOF reader.
pub trait XofVariant: HashVariant {}
impl XofVariant for Xof128 {}
impl XofVariant for Cxof128 {}

//======================================================================
// HashCore - absorbing phase
//======================================================================

/// Low-level sponge engine for the Ascon hash family. Use it through
/// [`CoreWrapper`], e.g. [`AsconHash256`](crate::AsconHash256).
#[derive(Clone)]
pub struct HashCore<V: HashVariant> {
    state: State,
    /// State right after initialization (and customization), for `Reset`.
    initial_state: State,
    _variant: PhantomData<V>,
}

impl<V: HashVariant> HashCore<V> {
    fn initialized() -> Self {
        let mut state = [V::IV, 0, 0, 0, 0];
        backends::permutation(&mut state, PA_ROUNDS);
        Self {
            state,
            initial_state: state,
            _variant: PhantomData,
        }
    }

    #[inline(always)]
    fn absorb_lane(&mut self, lane: u64) {
        self.state[0] ^= lane;
        backends::permutation(&mut self.state, PA_ROUNDS);
    }

    /// Absorbs a complete, padded input string.
    fn absorb_padded(&mut self, data: &[u8]) {
        let mut blocks = data.chunks_exact(HASH_RATE_BYTES);
        for block in &mut blocks {
            self.absorb_lane(load(block));
        }
        let tail = blocks.remainder();
        self.absorb_lane(load(tail) ^ pad(tail.len()));
    }

    fn customize(mut self, customization: &[u8]) -> Self {
        self.absorb_lane(8 * customization.len() as u64);
        self.absorb_padded(customization);
        self.initial_state = self.state;
        self
    }

    fn finish(&mut self, buffer: &mut Buffer<Self>) -> Reader {
        let tail = buffer.get_data();
        self.absorb_lane(load(tail) ^ pad(tail.len()));
        Reader { state: self.state }
    }
}

impl HashCore<Cxof128> {
    /// Creates an Ascon-CXOF128 core bound to `customization`.
    ///
    /// The customization string is limited to 256 bytes.
    pub fn with_customization(customization: &[u8]) -> Result<Self> {
        if customization.len() > CXOF_MAX_CUSTOM_BYTES {
            return Err(Error::CustomizationTooLong);
        }
        Ok(Self::initialized().customize(customization))
    }
}

impl<V: HashVariant> Default for HashCore<V> {
    fn default() -> Self {
        let core = Self::initialized();
        if V::CUSTOMIZABLE {
            core.customize(&[])
        } else {
            core
        }
    }
}

impl<V: HashVariant> HashMarker for HashCore<V> {}

impl<V: HashVariant> BlockSizeUser for HashCore<V> {
    type BlockSize = U8;
}

impl<V: HashVariant> BufferKindUser for HashCore<V> {
    type BufferKind = Eager;
}

impl<V: HashVariant> UpdateCore for HashCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.absorb_lane(load(block));
        }
    }
}

impl<V: FixedHashVariant> OutputSizeUser for HashCore<V> {
    type OutputSize = V::OutputSize;
}

impl<V: FixedHashVariant> FixedOutputCore for HashCore<V> {
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let mut reader = self.finish(buffer);
        for chunk in out.chunks_mut(HASH_RATE_BYTES) {
            let block = reader.read_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }
}

impl<V: XofVariant> ExtendableOutputCore for HashCore<V> {
    type ReaderCore = Reader;

    #[inline]
    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        self.finish(buffer)
    }
}

impl<V: HashVariant> Reset for HashCore<V> {
    fn reset(&mut self) {
        self.state = self.initial_state;
    }
}

impl<V: HashVariant> AlgorithmName for HashCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)
    }
}

impl<V: HashVariant> Drop for HashCore<V> {
    fn drop(&mut self) {
        self.state.zeroize();
        self.initial_state.zeroize();
    }
}

impl<V: HashVariant> ZeroizeOnDrop for HashCore<V> {}

//======================================================================
// Reader - squeezing phase
//======================================================================

/// Squeezes 64-bit blocks out of a finalized Ascon hash state.
#[derive(Clone)]
pub struct Reader {
    state: State,
}

impl BlockSizeUser for Reader {
    type BlockSize = U8;
}

impl XofReaderCore for Reader {
    #[inline]
    fn read_block(&mut self) -> Block<Self> {
        let block = Block::<Self>::clone_from_slice(&self.state[0].to_le_bytes());
        backends::permutation(&mut self.state, PA_ROUNDS);
        block
    }
}

impl Drop for Reader {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl ZeroizeOnDrop for Reader {}

//======================================================================
// High-level aliases and one-shot helpers
//======================================================================

/// Buffered hasher over any Ascon hash variant.
pub type Hasher<V> = CoreWrapper<HashCore<V>>;

/// Byte-granular XOF reader returned by `finalize_xof`.
pub type XofOutput = XofReaderCoreWrapper<Reader>;

/// Creates an Ascon-CXOF128 hasher bound to `customization`.
pub fn cxof128(customization: &[u8]) -> Result<Hasher<Cxof128>> {
    HashCore::<Cxof128>::with_customization(customization).map(CoreWrapper::from_core)
}

/// Computes the Ascon-Hash256 digest of `data`.
pub fn hash256(data: &[u8]) -> [u8; HASH256_OUT_BYTES] {
    let mut hasher = Hasher::<Hash256>::default();
    hasher.update(data);
    let mut out = [0u8; HASH256_OUT_BYTES];
    out.copy_from_slice(&hasher.finalize_fixed());
    out
}

/// Fills `out` with Ascon-XOF128 output for `data`.
pub fn xof128(data: &[u8], out: &mut [u8]) {
    let mut hasher = Hasher::<Xof128>::default();
    hasher.update(data);
    hasher.finalize_xof().read(out);
}
