//! `tvgen <generator>`: generate a single dataset.
//!
//! Resolves the effective configuration, builds the dataset in memory, and
//! only then writes it to stdout or the requested file, so a failed run
//! never leaves partial vectors behind.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};
use tvgen_config::GeneratorConfig;
use tvgen_datasets::{Dataset, Generator};

use crate::{GlobalArgs, OutputArgs, OutputFormat};

/// Runs one generator.
///
/// Returns exit code 0 on success.
pub fn run(
    generator: Generator,
    variant: Option<&str>,
    args: &OutputArgs,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let dataset = tvgen_datasets::generate(generator, variant, &config)?;
    let text = render(&dataset, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &text)?;
            info!("wrote {generator} dataset to {path}");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(0)
}

/// Loads the configuration file (if any), applies command-line overrides,
/// and validates the result.
pub fn resolve_config(global: &GlobalArgs) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let mut config = match &global.config {
        Some(path) => tvgen_config::load_config(Path::new(path))?,
        None => GeneratorConfig::default(),
    };

    if let Some(seed) = global.seed {
        config.rng.seed = seed;
    }
    if let Some(engine) = global.engine {
        config.rng.engine = engine;
    }
    tvgen_config::validate_config(&config)?;

    debug!(
        seed = config.rng.seed,
        engine = %config.rng.engine,
        "resolved configuration"
    );
    Ok(config)
}

/// Renders a dataset in the requested format.
pub fn render(dataset: &Dataset, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(dataset.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(dataset)?;
            json.push('\n');
            Ok(json)
        }
    }
}
