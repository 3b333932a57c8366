//! Error types for dataset selection.

/// Errors raised while selecting which dataset to generate.
///
/// Generation itself cannot fail once the configuration has been validated;
/// the only user error is naming a dataset variant that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// The variant selector is not one of the generator's variants.
    #[error("unrecognized {generator} dataset '{given}' (expected one of: {expected})")]
    UnknownVariant {
        /// Generator the selector was passed to.
        generator: &'static str,
        /// The selector as given.
        given: String,
        /// Comma-separated list of accepted selectors.
        expected: String,
    },

    /// The generator needs a variant selector and none was given.
    #[error("{generator} requires a dataset variant (expected one of: {expected})")]
    MissingVariant {
        /// Generator that was invoked.
        generator: &'static str,
        /// Comma-separated list of accepted selectors.
        expected: String,
    },

    /// A variant selector was given to a generator that has a single mode.
    #[error("{generator} takes no dataset variant, got '{given}'")]
    UnexpectedVariant {
        /// Generator that was invoked.
        generator: &'static str,
        /// The selector as given.
        given: String,
    },
}
