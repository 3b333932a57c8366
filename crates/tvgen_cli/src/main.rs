//! tvgen CLI: deterministic test-vector generation for HDL testbenches.
//!
//! Provides one subcommand per generator (`gcd`, `sorter`, `net-msg`,
//! `src-sink`), `all` for regenerating every dataset into a directory, and
//! `list` for enumerating the available datasets.

#![warn(missing_docs)]

mod all;
mod generate;
mod list;
mod logging;

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tvgen_common::Engine;
use tvgen_datasets::Generator;

/// tvgen: deterministic test vectors for HDL testbenches.
#[derive(Parser, Debug)]
#[command(name = "tvgen", version, about = "Deterministic HDL test-vector generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a `tvgen.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the random seed (decimal or `0x`-prefixed hex).
    #[arg(long, global = true, value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Override the random engine.
    #[arg(long, global = true, value_enum)]
    pub engine: Option<EngineArg>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// GCD unit vectors. Variants: random-a, random-b.
    Gcd(VariantArgs),
    /// Sorting pipeline vectors. Variants: random, sorted-fwd, sorted-rev.
    Sorter(VariantArgs),
    /// Network message vectors (single mode, no variant).
    NetMsg(OutputArgs),
    /// Source/sink memory vectors. Variants: ordered, unordered.
    SrcSink(VariantArgs),
    /// Generate every dataset variant into a directory.
    All(AllArgs),
    /// List every generator and its variants.
    List,
}

/// Arguments for generators that take a dataset variant.
#[derive(Args, Debug)]
pub struct VariantArgs {
    /// Dataset variant selector.
    pub variant: String,

    /// Output options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Where and how a single dataset is written.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `tvgen all` subcommand.
#[derive(Args, Debug)]
pub struct AllArgs {
    /// Directory to write `<generator>-<variant>` files into.
    #[arg(long)]
    pub out_dir: String,

    /// Output format for every file.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Dataset output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HDL statements for literal inclusion in a testbench.
    Text,
    /// Machine-readable JSON dump of the dataset.
    Json,
}

impl OutputFormat {
    /// File extension used by `tvgen all`.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "v",
            OutputFormat::Json => "json",
        }
    }
}

/// Random engine selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    /// MT19937, reproduces the existing fixture files.
    #[value(name = "mt19937")]
    Mt19937,
    /// ChaCha8.
    #[value(name = "chacha8")]
    Chacha8,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Mt19937 => Engine::Mt19937,
            EngineArg::Chacha8 => Engine::Chacha8,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a configuration file.
    pub config: Option<String>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Engine override.
    pub engine: Option<Engine>,
}

fn parse_seed(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid seed '{s}': {e}"))
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
        seed: cli.seed,
        engine: cli.engine.map(Engine::from),
    };

    if let Err(e) = logging::init(&global) {
        eprintln!("warning: {e}");
    }

    let result = match cli.command {
        Command::Gcd(ref args) => {
            generate::run(Generator::Gcd, Some(&args.variant), &args.output, &global)
        }
        Command::Sorter(ref args) => {
            generate::run(Generator::Sorter, Some(&args.variant), &args.output, &global)
        }
        Command::NetMsg(ref args) => generate::run(Generator::NetMsg, None, args, &global),
        Command::SrcSink(ref args) => {
            generate::run(Generator::SrcSink, Some(&args.variant), &args.output, &global)
        }
        Command::All(ref args) => all::run(args, &global),
        Command::List => list::run(),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
