//! Diagnostic logging to stderr. Stdout is reserved for dataset text.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::GlobalArgs;

/// Picks the maximum log level for the global flags.
pub fn level(global: &GlobalArgs) -> Level {
    if global.quiet {
        Level::WARN
    } else if global.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the global `tracing` subscriber.
pub fn init(global: &GlobalArgs) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level(global))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
