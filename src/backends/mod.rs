//======================================================================
// src/backends/mod.rs
// Ascon permutation backends. One is selected at compile time for the
// typed API; all of them stay reachable through `Implementation`.
//======================================================================

use cfg_if::cfg_if;

pub(crate) mod bi32;
pub(crate) mod soft;
pub(crate) mod unrolled;

cfg_if! {
    if #[cfg(feature = "bi32")] {
        pub(crate) use self::bi32::permutation;
    } else if #[cfg(feature = "lowsize")] {
        pub(crate) use self::soft::permutation;
    } else {
        pub(crate) use self::unrolled::permutation;
    }
}
