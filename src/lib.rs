#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires the modules.
//======================================================================

#[cfg(feature = "std")]
extern crate std;

// --- Module declarations ---
mod backends;
mod bytes;

pub mod aead;
pub mod consts;
pub mod error;
pub mod keyed;
pub mod selection;
pub mod sponge;
pub mod variant;


pub use ::aead as aead_api;
pub use digest;

pub use crate::error::{Error, Result};
pub use crate::selection::{Algorithm, Implementation, OptimizeFor, SuiteConfig, Version};
pub use crate::sponge::{cxof128, hash256, xof128};

use crate::variant::{Cxof128, Hash256, Xof128};

// -- AEAD --
pub use crate::aead::AsconAead128;

// -- Hash family --
pub type AsconHash256 = sponge::Hasher<Hash256>;
pub type AsconXof128 = sponge::Hasher<Xof128>;
pub type AsconCxof128 = sponge::Hasher<Cxof128>;
pub type AsconXofReader = sponge::XofOutput;

// -- Keyed family --
pub use crate::keyed::{AsconMac, AsconPrf, AsconPrfShort, PrfOutput as AsconPrfReader};
