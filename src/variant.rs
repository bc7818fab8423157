//======================================================================
// src/variant.rs
// Parameter sets of the unkeyed Ascon sponge family.
//======================================================================

use digest::consts::U32;
use digest::generic_array::ArrayLength;

use crate::consts::{CXOF128_IV, HASH256_IV, MAC_IV, PRF_IV, XOF128_IV};

/// Parameters shared by the Ascon hash family. All members use a 64-bit rate
/// and the 12-round permutation; they differ in their initial value.
pub trait HashVariant: Sized + Clone {
    /// Initial value placed in `x0` before the first permutation.
    const IV: u64;
    /// Name reported through `AlgorithmName`.
    const NAME: &'static str;
    /// Whether a customization string is absorbed ahead of the message.
    const CUSTOMIZABLE: bool = false;
}

/// A hash variant with a fixed digest length.
pub trait FixedHashVariant: HashVariant {
    type OutputSize: ArrayLength<u8> + 'static;
}

/// Ascon-Hash256: 256-bit digest.
#[derive(Clone, Debug)]
pub struct Hash256;
impl HashVariant for Hash256 {
    const IV: u64 = HASH256_IV;
    const NAME: &'static str = "Ascon-Hash256";
}
impl FixedHashVariant for Hash256 {
    type OutputSize = U32;
}

/// Ascon-XOF128: arbitrary-length output.
#[derive(Clone, Debug)]
pub struct Xof128;
impl HashVariant for Xof128 {
    const IV: u64 = XOF128_IV;
    const NAME: &'static str = "Ascon-XOF128";
}

/// Ascon-CXOF128: XOF128 with a customization string.
#[derive(Clone, Debug)]
pub struct Cxof128;
impl HashVariant for Cxof128 {
    const IV: u64 = CXOF128_IV;
    const NAME: &'static str = "Ascon-CXOF128";
    const CUSTOMIZABLE: bool = true;
}

/// Parameters of the keyed Ascon sponges (MAC and PRF). Both absorb 256
/// bits and squeeze 128 bits per `p^12` call; only the initial value differs.
pub trait KeyedVariant: Sized + Clone {
    const IV: u64;
    const NAME: &'static str;
}

/// Ascon-PRF, v1.3 parameters.
#[derive(Clone, Debug)]
pub struct PrfV13;
impl KeyedVariant for PrfV13 {
    const IV: u64 = PRF_IV;
    const NAME: &'static str = "Ascon-PRF";
}

/// Ascon-MAC, v1.3 parameters.
#[derive(Clone, Debug)]
pub struct MacV13;
impl KeyedVariant for MacV13 {
    const IV: u64 = MAC_IV;
    const NAME: &'static str = "Ascon-MAC";
}
