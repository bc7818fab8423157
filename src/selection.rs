//======================================================================
// src/selection.rs
// Suite configuration: which algorithms, versions and permutation
// implementations are enabled, parsed from user-friendly option lists.
//======================================================================

use core::fmt;
use core::str::FromStr;

use crate::backends;
use crate::consts::{State, RC};
use crate::error::{Error, Result, UnknownName};

/// Keyword that selects the default set for any option list.
pub const ANY: &str = "ANY";

/// Splits a comma or semicolon separated option list into trimmed,
/// non-empty items.
pub fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split([',', ';'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn or_any<S: AsRef<str>>(value: &Option<S>) -> &str {
    value.as_ref().map_or(ANY, |v| v.as_ref())
}

/// Returns `true` when `list` selects the defaults: `ANY` in any case, or no
/// items at all.
pub fn is_default_list(list: &str) -> bool {
    list.trim().eq_ignore_ascii_case(ANY) || split_list(list).next().is_none()
}

//======================================================================
// Algorithms and versions
//======================================================================

/// Version tag an algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    V128,
    V256,
    V13,
}

impl Version {
    pub const ALL: [Version; 3] = [Version::V128, Version::V256, Version::V13];

    pub const fn name(self) -> &'static str {
        match self {
            Version::V128 => "128",
            Version::V256 => "256",
            Version::V13 => "v13",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownVersion(UnknownName::new(s)))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Members of the Ascon suite, named as in the upstream C library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    AsconAead128,
    AsconHash256,
    AsconXof128,
    AsconCxof128,
    /// AEAD and XOF built as one unit.
    AsconAeadXof128,
    AsconMacV13,
    AsconPrfV13,
    AsconPrfsV13,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::AsconAead128,
        Algorithm::AsconHash256,
        Algorithm::AsconXof128,
        Algorithm::AsconCxof128,
        Algorithm::AsconAeadXof128,
        Algorithm::AsconMacV13,
        Algorithm::AsconPrfV13,
        Algorithm::AsconPrfsV13,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::AsconAead128 => "asconaead128",
            Algorithm::AsconHash256 => "asconhash256",
            Algorithm::AsconXof128 => "asconxof128",
            Algorithm::AsconCxof128 => "asconcxof128",
            Algorithm::AsconAeadXof128 => "asconaeadxof128",
            Algorithm::AsconMacV13 => "asconmacv13",
            Algorithm::AsconPrfV13 => "asconprfv13",
            Algorithm::AsconPrfsV13 => "asconprfsv13",
        }
    }

    pub const fn version(self) -> Version {
        match self {
            Algorithm::AsconHash256 => Version::V256,
            Algorithm::AsconMacV13 | Algorithm::AsconPrfV13 | Algorithm::AsconPrfsV13 => {
                Version::V13
            }
            _ => Version::V128,
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAlgorithm(UnknownName::new(s)))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//======================================================================
// Implementations
//======================================================================

/// Whether to favor code size or throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizeFor {
    Size,
    #[default]
    Speed,
}

impl FromStr for OptimizeFor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("size") {
            Ok(OptimizeFor::Size)
        } else if s.eq_ignore_ascii_case("speed") {
            Ok(OptimizeFor::Speed)
        } else {
            Err(Error::UnknownOptimization(UnknownName::new(s)))
        }
    }
}

/// Permutation implementations provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Implementation {
    /// Straightforward round loop.
    Ref,
    /// Unrolled 64-bit rounds.
    Opt64,
    /// Looped 64-bit rounds.
    Opt64Lowsize,
    /// 32-bit bit-interleaved lanes.
    Bi32,
}

impl Implementation {
    pub const ALL: [Implementation; 4] = [
        Implementation::Ref,
        Implementation::Opt64,
        Implementation::Opt64Lowsize,
        Implementation::Bi32,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Implementation::Ref => "ref",
            Implementation::Opt64 => "opt64",
            Implementation::Opt64Lowsize => "opt64_lowsize",
            Implementation::Bi32 => "bi32",
        }
    }

    /// The implementation the typed API was compiled with.
    pub const fn compiled() -> Self {
        if cfg!(feature = "bi32") {
            Implementation::Bi32
        } else if cfg!(feature = "lowsize") {
            Implementation::Opt64Lowsize
        } else {
            Implementation::Opt64
        }
    }

    /// The preferred implementation for `goal`.
    pub const fn preferred(goal: OptimizeFor) -> Self {
        match goal {
            OptimizeFor::Size => Implementation::Opt64Lowsize,
            OptimizeFor::Speed => Implementation::Opt64,
        }
    }

    /// The sibling of this implementation tuned for `goal`. Implementations
    /// without a sibling map to themselves.
    pub const fn tuned_for(self, goal: OptimizeFor) -> Self {
        match (self, goal) {
            (Implementation::Opt64 | Implementation::Opt64Lowsize, OptimizeFor::Size) => {
                Implementation::Opt64Lowsize
            }
            (Implementation::Opt64 | Implementation::Opt64Lowsize, OptimizeFor::Speed) => {
                Implementation::Opt64
            }
            (other, _) => other,
        }
    }

    /// Applies `p^rounds` to `state` with this implementation.
    pub fn permute(self, state: &mut State, rounds: usize) -> Result<()> {
        if rounds == 0 || rounds > RC.len() {
            return Err(Error::InvalidRounds(rounds));
        }
        match self {
            Implementation::Ref | Implementation::Opt64Lowsize => {
                backends::soft::permutation(state, rounds)
            }
            Implementation::Opt64 => backends::unrolled::permutation(state, rounds),
            Implementation::Bi32 => backends::bi32::permutation(state, rounds),
        }
        Ok(())
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl FromStr for Implementation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Implementation::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownImplementation(UnknownName::new(s)))
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//======================================================================
// SuiteConfig
//======================================================================

/// The enabled subset of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteConfig {
    algorithms: u16,
    versions: u8,
    implementations: u8,
    optimize: OptimizeFor,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.iter().fold(0, |acc, a| acc | a.bit()),
            versions: Version::ALL.iter().fold(0, |acc, v| acc | v.bit()),
            implementations: Implementation::ALL.iter().fold(0, |acc, i| acc | i.bit()),
            optimize: OptimizeFor::default(),
        }
    }
}

impl SuiteConfig {
    /// Builds a configuration from option lists. Each list is comma or
    /// semicolon separated; `ANY` or an empty list keeps the defaults.
    pub fn parse(algorithms: &str, implementations: &str, versions: &str) -> Result<Self> {
        let mut config = Self::default();

        if is_default_list(algorithms) {
            log::debug!("algorithm list `{algorithms}` selects the default set");
        } else {
            config.algorithms = 0;
            for item in split_list(algorithms) {
                config.algorithms |= item.parse::<Algorithm>()?.bit();
            }
        }

        if is_default_list(implementations) {
            log::debug!("implementation list `{implementations}` selects the default set");
        } else {
            config.implementations = 0;
            for item in split_list(implementations) {
                config.implementations |= item.parse::<Implementation>()?.bit();
            }
        }

        if is_default_list(versions) {
            log::debug!("version list `{versions}` selects the default set");
        } else {
            config.versions = 0;
            for item in split_list(versions) {
                config.versions |= item.parse::<Version>()?.bit();
            }
        }

        Ok(config)
    }

    /// Builds a configuration from named options: `ASCON_ALG_LIST`,
    /// `ASCON_IMPL_LIST`, `ASCON_VERSION_LIST` and `ASCON_OPTIMIZE`.
    /// Options for which `lookup` returns `None` keep their defaults.
    pub fn from_lookup<F, S>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<S>,
        S: AsRef<str>,
    {
        let algorithms = lookup("ASCON_ALG_LIST");
        let implementations = lookup("ASCON_IMPL_LIST");
        let versions = lookup("ASCON_VERSION_LIST");
        let config = Self::parse(
            or_any(&algorithms),
            or_any(&implementations),
            or_any(&versions),
        )?;

        match lookup("ASCON_OPTIMIZE") {
            Some(goal) => Ok(config.optimize_for(goal.as_ref().trim().parse()?)),
            None => Ok(config),
        }
    }

    /// Reads the options of [`SuiteConfig::from_lookup`] from the process
    /// environment.
    #[cfg(feature = "std")]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn optimize_for(mut self, goal: OptimizeFor) -> Self {
        self.optimize = goal;
        self
    }

    pub fn optimization(&self) -> OptimizeFor {
        self.optimize
    }

    /// An algorithm is enabled when it is listed and its version is listed.
    pub fn is_enabled(&self, algorithm: Algorithm) -> bool {
        self.algorithms & algorithm.bit() != 0 && self.versions & algorithm.version().bit() != 0
    }

    pub fn require(&self, algorithm: Algorithm) -> Result<()> {
        if self.is_enabled(algorithm) {
            Ok(())
        } else {
            Err(Error::AlgorithmDisabled(algorithm))
        }
    }

    pub fn enabled_algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        Algorithm::ALL.into_iter().filter(|a| self.is_enabled(*a))
    }

    pub fn enabled_implementations(&self) -> impl Iterator<Item = Implementation> + '_ {
        Implementation::ALL
            .into_iter()
            .filter(|i| self.implementations & i.bit() != 0)
    }

    /// Picks the enabled implementation that best matches the optimization
    /// goal: the preferred one if enabled, otherwise the first enabled one
    /// whose goal-tuned sibling is also enabled.
    ///
    /// [`SuiteConfig::parse`] never leaves the implementation set empty.
    pub fn implementation(&self) -> Implementation {
        let preferred = Implementation::preferred(self.optimize);
        let enabled = |i: &Implementation| self.implementations & i.bit() != 0;

        let choice = if enabled(&preferred) {
            preferred
        } else {
            self.enabled_implementations()
                .map(|i| i.tuned_for(self.optimize))
                .find(enabled)
                .unwrap_or(preferred)
        };

        log::trace!("selected `{choice}` for {:?}", self.optimize);
        choice
    }
}
