//! Error types for glow kernel operations.

/// Errors arising while loading a registry or validating a selection.
///
/// Resolution itself never fails: dangling references and empty feature
/// sets are legal inputs.
#[derive(Debug, thiserror::Error)]
pub enum GlowError {
    /// A version string is not of the form `major.minor`.
    #[error("invalid version `{input}`: {reason}")]
    InvalidVersion { input: String, reason: String },

    /// A selection field (api or profile) was empty.
    #[error("empty selection field: {0}")]
    EmptySelection(&'static str),

    /// The registry document could not be deserialized.
    #[error("registry parse error: {0}")]
    Registry(#[from] serde_json::Error),

    /// Reading the registry failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
