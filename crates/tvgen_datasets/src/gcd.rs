//! GCD unit test vectors.
//!
//! Each trial is an operand pair and its greatest common divisor, printed as
//! an `init(...)` task call for the GCD testbench.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;
use tvgen_common::{SizedHex, VectorRng};
use tvgen_config::GcdConfig;

use crate::error::DatasetError;
use crate::variant::Variant;

/// Largest operand drawn by [`GcdVariant::RandomA`].
const BYTE_MAX: u32 = 0xff;

/// Largest multiplier applied to the first operand in [`GcdVariant::RandomA`].
const MULTIPLIER_MAX: u32 = 0xf;

/// Largest operand drawn by [`GcdVariant::RandomB`].
const HALF_WORD_MAX: u32 = 0xffff;

/// Sampling strategy for GCD operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GcdVariant {
    /// 8-bit `a`, and `b = a * m mod 256` with `m` in `0..=15`. Favors shared factors.
    RandomA,
    /// Independent 16-bit operands. Mostly coprime pairs.
    RandomB,
}

impl Variant for GcdVariant {
    const GENERATOR: &'static str = "gcd";
    const ALL: &'static [Self] = &[GcdVariant::RandomA, GcdVariant::RandomB];

    fn name(self) -> &'static str {
        match self {
            GcdVariant::RandomA => "random-a",
            GcdVariant::RandomB => "random-b",
        }
    }
}

impl FromStr for GcdVariant {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One operand pair and its expected result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GcdTrial {
    /// First operand.
    pub a: u32,
    /// Second operand.
    pub b: u32,
    /// `gcd(a, b)`.
    pub gcd: u32,
}

/// A complete GCD dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GcdDataset {
    /// Strategy the operands were drawn with.
    pub variant: GcdVariant,
    /// Width of every printed field.
    pub field_width: u32,
    /// Trials in draw order.
    pub trials: Vec<GcdTrial>,
}

/// Euclid's algorithm. `gcd(0, 0)` is `0`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Draws `config.trials` operand pairs and computes their GCDs.
pub fn generate<R: VectorRng>(
    config: &GcdConfig,
    variant: GcdVariant,
    rng: &mut R,
) -> GcdDataset {
    let trials: Vec<GcdTrial> = (0..config.trials)
        .map(|_| {
            let (a, b) = match variant {
                GcdVariant::RandomA => {
                    let a = rng.randint(0, BYTE_MAX);
                    let m = rng.randint(0, MULTIPLIER_MAX);
                    (a, (a * m) & BYTE_MAX)
                }
                GcdVariant::RandomB => {
                    let a = rng.randint(0, HALF_WORD_MAX);
                    let b = rng.randint(0, HALF_WORD_MAX);
                    (a, b)
                }
            };
            GcdTrial { a, b, gcd: gcd(a, b) }
        })
        .collect();

    debug!(
        variant = variant.name(),
        trials = trials.len(),
        "generated gcd dataset"
    );

    GcdDataset {
        variant,
        field_width: config.field_width,
        trials,
    }
}

impl fmt::Display for GcdDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "num_inputs = {} ;", self.trials.len())?;
        let hex = |v| SizedHex::new(self.field_width, v);
        for (i, t) in self.trials.iter().enumerate() {
            writeln!(
                f,
                "init( {i:02}, {}, {}, {} );",
                hex(t.a),
                hex(t.b),
                hex(t.gcd)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvgen_common::{Engine, SeededRng, DEFAULT_SEED};

    fn default_rng() -> SeededRng {
        SeededRng::new(Engine::Mt19937, DEFAULT_SEED)
    }

    #[test]
    fn gcd_basic() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0x9c, 0xb4), 0xc);
    }

    #[test]
    fn gcd_zero_operands() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
    }

    #[test]
    fn variant_names_parse() {
        assert_eq!("random-a".parse::<GcdVariant>().unwrap(), GcdVariant::RandomA);
        assert_eq!("random-b".parse::<GcdVariant>().unwrap(), GcdVariant::RandomB);
        let err = "random".parse::<GcdVariant>().unwrap_err();
        assert!(matches!(err, DatasetError::UnknownVariant { generator: "gcd", .. }));
    }

    #[test]
    fn random_a_operands_are_bytes() {
        let ds = generate(&GcdConfig::default(), GcdVariant::RandomA, &mut default_rng());
        assert_eq!(ds.trials.len(), 25);
        for t in &ds.trials {
            assert!(t.a <= 0xff && t.b <= 0xff);
            assert_eq!(t.gcd, gcd(t.a, t.b));
        }
    }

    #[test]
    fn random_b_operands_are_half_words() {
        let ds = generate(&GcdConfig::default(), GcdVariant::RandomB, &mut default_rng());
        assert!(ds.trials.iter().any(|t| t.a > 0xff || t.b > 0xff));
        for t in &ds.trials {
            assert!(t.a <= 0xffff && t.b <= 0xffff);
        }
    }

    #[test]
    fn first_trial_of_fixture() {
        let ds = generate(&GcdConfig::default(), GcdVariant::RandomA, &mut default_rng());
        assert_eq!(
            ds.trials[0],
            GcdTrial {
                a: 0x04,
                b: 0x1c,
                gcd: 0x04
            }
        );
    }

    #[test]
    fn render_header_and_rows() {
        let ds = GcdDataset {
            variant: GcdVariant::RandomB,
            field_width: 16,
            trials: vec![
                GcdTrial { a: 12, b: 18, gcd: 6 },
                GcdTrial { a: 0x996a, b: 0x6d14, gcd: 2 },
            ],
        };
        assert_eq!(
            ds.to_string(),
            "num_inputs = 2 ;\n\
             init( 00, 16'h000c, 16'h0012, 16'h0006 );\n\
             init( 01, 16'h996a, 16'h6d14, 16'h0002 );\n"
        );
    }

    #[test]
    fn render_wider_fields() {
        let ds = GcdDataset {
            variant: GcdVariant::RandomA,
            field_width: 32,
            trials: vec![GcdTrial { a: 1, b: 0, gcd: 1 }],
        };
        assert!(ds.to_string().contains("init( 00, 32'h00000001, 32'h00000000, 32'h00000001 );"));
    }

    #[test]
    fn render_index_beyond_two_digits() {
        let config = GcdConfig {
            trials: 120,
            field_width: 16,
        };
        let ds = generate(&config, GcdVariant::RandomA, &mut default_rng());
        let text = ds.to_string();
        assert!(text.starts_with("num_inputs = 120 ;\n"));
        assert!(text.contains("init( 119, "));
        assert_eq!(text.lines().count(), 121);
    }
}
