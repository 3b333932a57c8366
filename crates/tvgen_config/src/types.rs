//! Configuration types deserialized from `tvgen.toml`.
//!
//! Every section and key is optional. Missing values fall back to the
//! constants the existing testbench fixtures were generated with.

use serde::Deserialize;
use tvgen_common::{Engine, DEFAULT_SEED};

/// The top-level configuration parsed from `tvgen.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed and engine shared by every generator.
    pub rng: RngConfig,
    /// GCD unit vector settings.
    pub gcd: GcdConfig,
    /// Sorting pipeline vector settings.
    pub sorter: SorterConfig,
    /// Network message vector settings.
    pub net: NetConfig,
    /// Source/sink memory vector settings.
    pub src_sink: SrcSinkConfig,
}

/// Random source selection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RngConfig {
    /// Seed applied before any draw (default `0xdeadbeef`).
    pub seed: u64,
    /// Pseudo-random algorithm (default `mt19937`).
    pub engine: Engine,
}

impl Default for RngConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            engine: Engine::default(),
        }
    }
}

/// GCD unit vector settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GcdConfig {
    /// Number of operand pairs to emit.
    pub trials: usize,
    /// Width in bits of every emitted field, for both variants.
    pub field_width: u32,
}

impl Default for GcdConfig {
    fn default() -> Self {
        Self {
            trials: 25,
            field_width: 16,
        }
    }
}

/// Sorting pipeline vector settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SorterConfig {
    /// Number of 4-byte groups pushed through the pipeline.
    pub trials: usize,
    /// Cycles between a group entering and its sorted result appearing.
    pub latency: usize,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            latency: 3,
        }
    }
}

/// Network message vector settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetConfig {
    /// Number of messages to emit.
    pub trials: usize,
    /// Number of network ports; source and destination are drawn below it.
    pub num_ports: u32,
    /// Width in bits of the source and destination fields.
    pub srcdest_nbits: u32,
    /// Width in bits of the opaque field.
    pub opaque_nbits: u32,
    /// Width in bits of the payload field.
    pub payload_nbits: u32,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            num_ports: 4,
            srcdest_nbits: 2,
            opaque_nbits: 8,
            payload_nbits: 8,
        }
    }
}

/// Source/sink memory vector settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SrcSinkConfig {
    /// Number of bytes in each memory.
    pub size: usize,
}

impl Default for SrcSinkConfig {
    fn default() -> Self {
        Self { size: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn defaults_match_fixture_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.rng.seed, 0xdeadbeef);
        assert_eq!(config.rng.engine, Engine::Mt19937);
        assert_eq!(config.gcd.trials, 25);
        assert_eq!(config.gcd.field_width, 16);
        assert_eq!(config.sorter.trials, 100);
        assert_eq!(config.sorter.latency, 3);
        assert_eq!(config.net.trials, 100);
        assert_eq!(config.net.num_ports, 4);
        assert_eq!(config.net.srcdest_nbits, 2);
        assert_eq!(config.net.opaque_nbits, 8);
        assert_eq!(config.net.payload_nbits, 8);
        assert_eq!(config.src_sink.size, 100);
    }

    #[test]
    fn engine_all_variants() {
        for (input, expected) in [("mt19937", Engine::Mt19937), ("chacha8", Engine::Chacha8)] {
            let toml = format!(
                r#"
[rng]
engine = "{input}"
"#
            );
            let config = load_config_from_str(&toml).unwrap();
            assert_eq!(config.rng.engine, expected);
        }
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let toml = r#"
[net]
opaque_nbits = 12
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.net.opaque_nbits, 12);
        assert_eq!(config.net.payload_nbits, 8);
        assert_eq!(config.net.num_ports, 4);
        assert_eq!(config.sorter, SorterConfig::default());
    }

    #[test]
    fn hex_seed_literal() {
        let toml = r#"
[rng]
seed = 0xcafe
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.rng.seed, 0xcafe);
        assert_eq!(config.rng.engine, Engine::Mt19937);
    }
}
