use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for a reproducible evolution run.
///
/// This is a 128-bit (16-byte) seed for the random number generator that drives every
/// draw of a run: the initial population, parent picks, crossover points and mutations.
/// Running twice with the same seed and parameters yields identical populations.
///
/// Seeds are written as 32 hex digits, big-endian.
///
/// # Example
///
/// ```
/// use attrevo_genetic::RunSeed;
/// use rand::Rng as _;
///
/// let seed: RunSeed = rand::rng().random();
/// let text = seed.to_string();
/// assert_eq!(text.parse::<RunSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid seed: expected 32 hex characters, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid seed: {text} is not hexadecimal")]
    InvalidDigit { text: String },
}

impl RunSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates the generator for this seed.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for RunSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for RunSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let invalid = || ParseSeedError::InvalidDigit { text: s.to_owned() };
        // from_str_radix alone would also accept a leading '+'
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for RunSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RunSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `RunSeed` values with `rng.random()`.
impl Distribution<RunSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RunSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        RunSeed(seed)
    }
}
