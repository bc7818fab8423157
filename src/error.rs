//======================================================================
// src/error.rs
// Crate error type. Authentication failures use the RustCrypto error
// types (`aead::Error`, `digest::MacError`) instead.
//======================================================================

use thiserror::Error;

use crate::consts::{CXOF_MAX_CUSTOM_BYTES, PRFS_MAX_INPUT_BYTES};
use crate::selection::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An algorithm name that is not part of the suite.
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(UnknownName),
    /// An implementation name that this crate does not provide.
    #[error("unknown implementation `{0}`")]
    UnknownImplementation(UnknownName),
    /// A version tag other than `128`, `256` or `v13`.
    #[error("unknown version `{0}`")]
    UnknownVersion(UnknownName),
    /// An optimization mode other than `size` or `speed`.
    #[error("unknown optimization mode `{0}`")]
    UnknownOptimization(UnknownName),
    /// The configuration does not enable this algorithm.
    #[error("algorithm `{}` is not enabled", .0.name())]
    AlgorithmDisabled(Algorithm),
    #[error("customization string exceeds {} bytes", CXOF_MAX_CUSTOM_BYTES)]
    CustomizationTooLong,
    #[error("PRFshort input exceeds {} bytes", PRFS_MAX_INPUT_BYTES)]
    InputTooLong,
    /// A PRFshort tag did not verify.
    #[error("tag mismatch")]
    TagMismatch,
    #[error("permutation rounds must be in 1..=12, got {0}")]
    InvalidRounds(usize),
}

pub type Result<T> = core::result::Result<T, Error>;

/// An unrecognized option value, stored inline. Names longer than 32 bytes
/// are truncated.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct UnknownName {
    buf: [u8; Self::CAPACITY],
    len: u8,
}

impl UnknownName {
    const CAPACITY: usize = 32;

    pub(crate) fn new(name: &str) -> Self {
        let mut end = name.len().min(Self::CAPACITY);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        let mut buf = [0u8; Self::CAPACITY];
        buf[..end].copy_from_slice(&name.as_bytes()[..end]);
        Self { buf, len: end as u8 }
    }

    pub fn as_str(&self) -> &str {
        // Always cut on a char boundary in `new`.
        core::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or_default()
    }
}

impl core::fmt::Display for UnknownName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Debug for UnknownName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_str(), f)
    }
}
