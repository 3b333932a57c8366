//! Dispatch from generator and variant selectors to datasets.
//!
//! Every run starts from a freshly seeded stream, so a dataset's contents
//! depend only on its generator, variant and configuration, never on what
//! else was generated before it in the same process.

use std::fmt;

use serde::Serialize;
use tvgen_common::SeededRng;
use tvgen_config::GeneratorConfig;

use crate::error::DatasetError;
use crate::gcd::{self, GcdDataset, GcdVariant};
use crate::net_msg::{self, NetMsgDataset};
use crate::sorter::{self, SorterDataset, SorterVariant};
use crate::src_sink::{self, SrcSinkDataset, SrcSinkVariant};
use crate::variant::Variant;

/// The four test-vector generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Generator {
    /// GCD unit vectors.
    Gcd,
    /// Sorting pipeline vectors.
    Sorter,
    /// Network message vectors.
    NetMsg,
    /// Source/sink memory vectors.
    SrcSink,
}

impl Generator {
    /// All generators, in listing order.
    pub const ALL: [Generator; 4] = [
        Generator::Gcd,
        Generator::Sorter,
        Generator::NetMsg,
        Generator::SrcSink,
    ];

    /// Returns the generator's command name.
    pub fn name(self) -> &'static str {
        match self {
            Generator::Gcd => GcdVariant::GENERATOR,
            Generator::Sorter => SorterVariant::GENERATOR,
            Generator::NetMsg => "net-msg",
            Generator::SrcSink => SrcSinkVariant::GENERATOR,
        }
    }

    /// Returns the accepted variant selectors. Empty when the generator has a single mode.
    pub fn variants(self) -> Vec<&'static str> {
        fn names<V: Variant>() -> Vec<&'static str> {
            V::ALL.iter().map(|v| v.name()).collect()
        }
        match self {
            Generator::Gcd => names::<GcdVariant>(),
            Generator::Sorter => names::<SorterVariant>(),
            Generator::NetMsg => Vec::new(),
            Generator::SrcSink => names::<SrcSinkVariant>(),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One dataset to produce: a generator plus its variant selector, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Job {
    /// Generator to run.
    pub generator: Generator,
    /// Variant selector, `None` for single-mode generators.
    pub variant: Option<&'static str>,
}

impl Job {
    /// File stem for this job's output, e.g. `gcd-random-a` or `net-msg`.
    pub fn stem(&self) -> String {
        match self.variant {
            Some(v) => format!("{}-{v}", self.generator),
            None => self.generator.name().to_string(),
        }
    }
}

/// Every generator/variant combination, in listing order.
pub fn all_jobs() -> Vec<Job> {
    Generator::ALL
        .into_iter()
        .flat_map(|generator| {
            let variants = generator.variants();
            if variants.is_empty() {
                vec![Job {
                    generator,
                    variant: None,
                }]
            } else {
                variants
                    .into_iter()
                    .map(|v| Job {
                        generator,
                        variant: Some(v),
                    })
                    .collect()
            }
        })
        .collect()
}

/// A generated dataset of any kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "generator", rename_all = "kebab-case")]
pub enum Dataset {
    /// GCD unit vectors.
    Gcd(GcdDataset),
    /// Sorting pipeline vectors.
    Sorter(SorterDataset),
    /// Network message vectors.
    NetMsg(NetMsgDataset),
    /// Source/sink memory vectors.
    SrcSink(SrcSinkDataset),
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Gcd(ds) => fmt::Display::fmt(ds, f),
            Dataset::Sorter(ds) => fmt::Display::fmt(ds, f),
            Dataset::NetMsg(ds) => fmt::Display::fmt(ds, f),
            Dataset::SrcSink(ds) => fmt::Display::fmt(ds, f),
        }
    }
}

/// Generates one dataset from a freshly seeded stream.
///
/// The variant is parsed before any draw, so an unknown selector fails
/// without producing anything. `config` is expected to have passed
/// [`tvgen_config::validate_config`].
pub fn generate(
    generator: Generator,
    variant: Option<&str>,
    config: &GeneratorConfig,
) -> Result<Dataset, DatasetError> {
    let mut rng = SeededRng::new(config.rng.engine, config.rng.seed);
    let dataset = match generator {
        Generator::Gcd => {
            let v = require_variant::<GcdVariant>(variant)?;
            Dataset::Gcd(gcd::generate(&config.gcd, v, &mut rng))
        }
        Generator::Sorter => {
            let v = require_variant::<SorterVariant>(variant)?;
            Dataset::Sorter(sorter::generate(&config.sorter, v, &mut rng))
        }
        Generator::NetMsg => {
            if let Some(given) = variant {
                return Err(DatasetError::UnexpectedVariant {
                    generator: generator.name(),
                    given: given.to_string(),
                });
            }
            Dataset::NetMsg(net_msg::generate(&config.net, &mut rng))
        }
        Generator::SrcSink => {
            let v = require_variant::<SrcSinkVariant>(variant)?;
            Dataset::SrcSink(src_sink::generate(&config.src_sink, v, &mut rng))
        }
    };
    Ok(dataset)
}

fn require_variant<V: Variant>(given: Option<&str>) -> Result<V, DatasetError> {
    match given {
        Some(s) => V::parse(s),
        None => Err(DatasetError::MissingVariant {
            generator: V::GENERATOR,
            expected: V::expected(),
        }),
    }
}
