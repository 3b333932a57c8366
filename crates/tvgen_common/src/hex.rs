//! Sized hexadecimal literals in Verilog syntax (`8'h3f`, `16'h001c`, `8'h??`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Widest field, in bits, that a generator may be configured to emit.
pub const MAX_FIELD_BITS: u32 = 32;

/// Number of hex digits needed to print a field of `nbits` bits.
pub fn hex_digits(nbits: u32) -> usize {
    nbits.div_ceil(4) as usize
}

/// Largest value representable in `nbits` bits.
///
/// # Panics
///
/// Panics if `nbits` is zero or greater than [`MAX_FIELD_BITS`].
pub fn max_value(nbits: u32) -> u32 {
    assert!(
        (1..=MAX_FIELD_BITS).contains(&nbits),
        "field width {nbits} out of range 1..={MAX_FIELD_BITS}"
    );
    u32::MAX >> (MAX_FIELD_BITS - nbits)
}

/// A known value rendered as a zero-padded, width-prefixed hex literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizedHex {
    width: u32,
    value: u32,
}

impl SizedHex {
    /// Creates a literal of `width` bits holding `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` does not fit in `width` bits.
    pub fn new(width: u32, value: u32) -> Self {
        assert!(
            value <= max_value(width),
            "value {value:#x} does not fit in {width} bits"
        );
        Self { width, value }
    }

    /// Returns the declared width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the literal's value.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for SizedHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'h{:0>digits$x}",
            self.width,
            self.value,
            digits = hex_digits(self.width)
        )
    }
}

/// A placeholder literal the consuming testbench must not check.
///
/// Renders the marker once per hex digit, e.g. `8'h??` or `8'hxx`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DontCare {
    width: u32,
    marker: char,
}

impl DontCare {
    /// A don't-care literal using `?` digits.
    pub fn question(width: u32) -> Self {
        Self { width, marker: '?' }
    }

    /// A don't-care literal using `x` digits.
    pub fn unknown(width: u32) -> Self {
        Self { width, marker: 'x' }
    }
}

impl fmt::Display for DontCare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'h", self.width)?;
        for _ in 0..hex_digits(self.width) {
            write!(f, "{}", self.marker)?;
        }
        Ok(())
    }
}
