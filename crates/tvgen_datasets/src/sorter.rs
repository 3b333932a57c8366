//! Sorting pipeline test vectors.
//!
//! The sorter accepts a group of four bytes per cycle and produces the sorted
//! group `latency` cycles later. The rendered stream is cycle-accurate: each
//! `t1(...)` call carries an input-valid flag and group and an output-valid
//! flag and group, with don't-care literals wherever a side is idle.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;
use tvgen_common::{DontCare, SizedHex, VectorRng};
use tvgen_config::SorterConfig;

use crate::error::DatasetError;
use crate::variant::Variant;

/// Number of elements the sorter handles per group.
pub const GROUP_SIZE: usize = 4;

/// Width in bits of each element.
pub const ELEMENT_WIDTH: u32 = 8;

/// A group of elements entering or leaving the sorter in one cycle.
pub type Group = [u8; GROUP_SIZE];

/// Ordering of the stimulus groups presented to the sorter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SorterVariant {
    /// Groups in draw order.
    Random,
    /// Groups already in ascending order.
    SortedFwd,
    /// Groups in descending order.
    SortedRev,
}

impl Variant for SorterVariant {
    const GENERATOR: &'static str = "sorter";
    const ALL: &'static [Self] = &[
        SorterVariant::Random,
        SorterVariant::SortedFwd,
        SorterVariant::SortedRev,
    ];

    fn name(self) -> &'static str {
        match self {
            SorterVariant::Random => "random",
            SorterVariant::SortedFwd => "sorted-fwd",
            SorterVariant::SortedRev => "sorted-rev",
        }
    }
}

impl FromStr for SorterVariant {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One group and its expected sorted result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SorterTrial {
    /// Group as presented to the sorter.
    pub input: Group,
    /// Same elements in ascending order.
    pub expected: Group,
}

/// One cycle of pipeline stimulus and response. `None` marks an idle side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// Group entering the pipeline this cycle.
    pub input: Option<Group>,
    /// Group expected at the pipeline output this cycle.
    pub output: Option<Group>,
}

/// A complete sorter dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SorterDataset {
    /// Stimulus ordering the groups were presented with.
    pub variant: SorterVariant,
    /// Pipeline depth in cycles.
    pub latency: usize,
    /// Trials in draw order.
    pub trials: Vec<SorterTrial>,
}

impl SorterDataset {
    /// Iterates the `trials + latency` cycles of the pipeline schedule.
    ///
    /// Cycle `i` carries input `i` while `i < trials` and the result of
    /// trial `i - latency` once `i >= latency`, so the pipeline fills for
    /// `latency` cycles and drains for `latency` cycles.
    pub fn cycles(&self) -> impl Iterator<Item = Cycle> + '_ {
        (0..self.trials.len() + self.latency).map(move |i| Cycle {
            input: self.trials.get(i).map(|t| t.input),
            output: i
                .checked_sub(self.latency)
                .and_then(|j| self.trials.get(j))
                .map(|t| t.expected),
        })
    }
}

/// Draws `config.trials` groups and computes their sorted results.
pub fn generate<R: VectorRng>(
    config: &SorterConfig,
    variant: SorterVariant,
    rng: &mut R,
) -> SorterDataset {
    let trials: Vec<SorterTrial> = (0..config.trials)
        .map(|_| {
            let drawn: Group = std::array::from_fn(|_| rng.byte());
            let mut expected = drawn;
            expected.sort_unstable();
            let input = match variant {
                SorterVariant::Random => drawn,
                SorterVariant::SortedFwd => expected,
                SorterVariant::SortedRev => {
                    let mut rev = expected;
                    rev.reverse();
                    rev
                }
            };
            SorterTrial { input, expected }
        })
        .collect();

    debug!(
        variant = variant.name(),
        trials = trials.len(),
        latency = config.latency,
        "generated sorter dataset"
    );

    SorterDataset {
        variant,
        latency: config.latency,
        trials,
    }
}

fn write_side(
    f: &mut fmt::Formatter<'_>,
    group: Option<&Group>,
    idle: DontCare,
) -> fmt::Result {
    match group {
        Some(g) => {
            write!(f, "1")?;
            for &b in g {
                write!(f, ", {}", SizedHex::new(ELEMENT_WIDTH, u32::from(b)))?;
            }
        }
        None => {
            write!(f, "0")?;
            for _ in 0..GROUP_SIZE {
                write!(f, ", {idle}")?;
            }
        }
    }
    Ok(())
}

impl fmt::Display for SorterDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "num_inputs = {} ;", self.trials.len())?;
        for cycle in self.cycles() {
            write!(f, "t1( ")?;
            write_side(f, cycle.input.as_ref(), DontCare::unknown(ELEMENT_WIDTH))?;
            write!(f, " , ")?;
            write_side(f, cycle.output.as_ref(), DontCare::question(ELEMENT_WIDTH))?;
            writeln!(f, " );")?;
        }
        Ok(())
    }
}
