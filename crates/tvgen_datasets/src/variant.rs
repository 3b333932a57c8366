//! Closed enumerations of dataset variants.

use crate::error::DatasetError;

/// A generator's fixed set of sampling strategies.
///
/// Parsing is exhaustive: any selector outside [`Variant::ALL`] is an error,
/// never a silent no-op.
pub trait Variant: Copy + Sized + 'static {
    /// Name of the generator these variants belong to.
    const GENERATOR: &'static str;

    /// Every variant, in the order they are listed to users.
    const ALL: &'static [Self];

    /// The selector string for this variant.
    fn name(self) -> &'static str;

    /// Parses a selector string.
    fn parse(given: &str) -> Result<Self, DatasetError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name() == given)
            .ok_or_else(|| DatasetError::UnknownVariant {
                generator: Self::GENERATOR,
                given: given.to_string(),
                expected: Self::expected(),
            })
    }

    /// Comma-separated list of accepted selectors.
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
