//! Seeded random sources handed to each generator.
//!
//! Generators never touch process-wide random state. Callers construct a
//! [`SeededRng`] from an [`Engine`] and a seed and pass it down explicitly,
//! so tests can inject any stream implementing [`VectorRng`].

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::mt19937::Mt19937;

/// Seed every generator starts from unless configured otherwise.
pub const DEFAULT_SEED: u64 = 0xdead_beef;

/// The sampling operations a generator needs.
pub trait VectorRng {
    /// Draws an integer uniformly from `low..=high`.
    fn randint(&mut self, low: u32, high: u32) -> u32;

    /// Draws a byte uniformly from `0..=255`.
    fn byte(&mut self) -> u8 {
        self.randint(0, 0xff) as u8
    }

    /// Permutes `items` uniformly in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl VectorRng for Mt19937 {
    fn randint(&mut self, low: u32, high: u32) -> u32 {
        Mt19937::randint(self, low, high)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        Mt19937::shuffle(self, items)
    }
}

impl VectorRng for ChaCha8Rng {
    fn randint(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self)
    }
}

/// Pseudo-random algorithm backing a [`SeededRng`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// MT19937 with fixture-compatible sampling (default).
    #[default]
    Mt19937,
    /// ChaCha with 8 rounds, sampled through `rand`.
    Chacha8,
}

impl Engine {
    /// All engines, in display order.
    pub const ALL: [Engine; 2] = [Engine::Mt19937, Engine::Chacha8];

    /// Returns the engine's configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Engine::Mt19937 => "mt19937",
            Engine::Chacha8 => "chacha8",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown engine name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseEngineError(String);

impl fmt::Display for ParseEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown engine '{}' (expected mt19937 or chacha8)", self.0)
    }
}

impl std::error::Error for ParseEngineError {}

impl FromStr for Engine {
    type Err = ParseEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| ParseEngineError(s.to_string()))
    }
}

/// A seeded stream over one of the supported engines.
#[derive(Clone, Debug)]
pub enum SeededRng {
    /// MT19937 stream.
    Mt19937(Mt19937),
    /// ChaCha8 stream.
    Chacha8(ChaCha8Rng),
}

impl SeededRng {
    /// Creates a fresh stream for `engine` seeded with `seed`.
    pub fn new(engine: Engine, seed: u64) -> Self {
        match engine {
            Engine::Mt19937 => SeededRng::Mt19937(Mt19937::from_seed(seed)),
            Engine::Chacha8 => SeededRng::Chacha8(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the engine this stream runs on.
    pub fn engine(&self) -> Engine {
        match self {
            SeededRng::Mt19937(_) => Engine::Mt19937,
            SeededRng::Chacha8(_) => Engine::Chacha8,
        }
    }
}

impl VectorRng for SeededRng {
    fn randint(&mut self, low: u32, high: u32) -> u32 {
        match self {
            SeededRng::Mt19937(rng) => rng.randint(low, high),
            SeededRng::Chacha8(rng) => VectorRng::randint(rng, low, high),
        }
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        match self {
            SeededRng::Mt19937(rng) => rng.shuffle(items),
            SeededRng::Chacha8(rng) => VectorRng::shuffle(rng, items),
        }
    }
}
