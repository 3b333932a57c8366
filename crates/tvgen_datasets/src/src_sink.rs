//! Source/sink memory test vectors.
//!
//! Fills the source memory with random bytes and the sink memory with the
//! bytes the sink should receive. When ordering is not guaranteed the sink
//! memory holds a shuffled copy and the testbench matches by content.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;
use tvgen_common::{SizedHex, VectorRng};
use tvgen_config::SrcSinkConfig;

use crate::error::DatasetError;
use crate::variant::Variant;

/// Whether the sink receives bytes in source order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SrcSinkVariant {
    /// Sink memory equals source memory.
    Ordered,
    /// Sink memory is a random permutation of source memory.
    Unordered,
}

impl Variant for SrcSinkVariant {
    const GENERATOR: &'static str = "src-sink";
    const ALL: &'static [Self] = &[SrcSinkVariant::Ordered, SrcSinkVariant::Unordered];

    fn name(self) -> &'static str {
        match self {
            SrcSinkVariant::Ordered => "ordered",
            SrcSinkVariant::Unordered => "unordered",
        }
    }
}

impl FromStr for SrcSinkVariant {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parallel source and sink memory images.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SrcSinkDataset {
    /// Ordering the sink image was built with.
    pub variant: SrcSinkVariant,
    /// Bytes the source sends, by address.
    pub src: Vec<u8>,
    /// Bytes the sink expects, by address.
    pub sink: Vec<u8>,
}

impl SrcSinkDataset {
    /// Returns true if the sink holds the same multiset of bytes as the source.
    pub fn sink_is_permutation(&self) -> bool {
        let mut src = self.src.clone();
        let mut sink = self.sink.clone();
        src.sort_unstable();
        sink.sort_unstable();
        src == sink
    }
}

/// Draws `config.size` source bytes and derives the sink image.
///
/// The shuffle for [`SrcSinkVariant::Unordered`] is drawn after every source byte.
pub fn generate<R: VectorRng>(
    config: &SrcSinkConfig,
    variant: SrcSinkVariant,
    rng: &mut R,
) -> SrcSinkDataset {
    let src: Vec<u8> = (0..config.size).map(|_| rng.byte()).collect();
    let mut sink = src.clone();
    if variant == SrcSinkVariant::Unordered {
        rng.shuffle(&mut sink);
    }

    debug!(
        variant = variant.name(),
        size = src.len(),
        "generated src-sink dataset"
    );

    SrcSinkDataset { variant, src, sink }
}

impl fmt::Display for SrcSinkDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (&src, &sink)) in self.src.iter().zip(&self.sink).enumerate() {
            writeln!(
                f,
                "`SRC_MEM[{i:02}] = {}; `SINK_MEM[{i:02}] = {};",
                SizedHex::new(8, u32::from(src)),
                SizedHex::new(8, u32::from(sink))
            )?;
        }
        Ok(())
    }
}
