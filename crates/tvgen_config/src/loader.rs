//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::GeneratorConfig;
use std::path::Path;
use tvgen_common::hex::MAX_FIELD_BITS;

/// Loads and validates a `tvgen.toml` configuration from `path`.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `tvgen.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that every count is positive and every width fits the emitted fields.
///
/// Also applied to configurations built in code or adjusted by command-line
/// overrides, before any generator runs.
pub fn validate_config(config: &GeneratorConfig) -> Result<(), ConfigError> {
    require_nonzero("gcd.trials", config.gcd.trials)?;
    if !(16..=MAX_FIELD_BITS).contains(&config.gcd.field_width) {
        return Err(invalid(format!(
            "gcd.field_width must be between 16 and {MAX_FIELD_BITS}, got {}",
            config.gcd.field_width
        )));
    }

    require_nonzero("sorter.trials", config.sorter.trials)?;
    require_nonzero("sorter.latency", config.sorter.latency)?;
    if config.sorter.trials < config.sorter.latency {
        return Err(invalid(format!(
            "sorter.trials ({}) must be at least sorter.latency ({})",
            config.sorter.trials, config.sorter.latency
        )));
    }

    let net = &config.net;
    require_nonzero("net.trials", net.trials)?;
    require_width("net.srcdest_nbits", net.srcdest_nbits)?;
    require_width("net.opaque_nbits", net.opaque_nbits)?;
    require_width("net.payload_nbits", net.payload_nbits)?;
    let port_limit = 1u64 << net.srcdest_nbits;
    if net.num_ports == 0 || u64::from(net.num_ports) > port_limit {
        return Err(invalid(format!(
            "net.num_ports must be between 1 and {port_limit} for {}-bit addresses, got {}",
            net.srcdest_nbits, net.num_ports
        )));
    }

    require_nonzero("src_sink.size", config.src_sink.size)?;
    Ok(())
}

fn require_nonzero(key: &str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(invalid(format!("{key} must be at least 1")));
    }
    Ok(())
}

fn require_width(key: &str, bits: u32) -> Result<(), ConfigError> {
    if !(1..=MAX_FIELD_BITS).contains(&bits) {
        return Err(invalid(format!(
            "{key} must be between 1 and {MAX_FIELD_BITS}, got {bits}"
        )));
    }
    Ok(())
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError(message)
}
