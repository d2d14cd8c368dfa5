use thiserror::Error;

/// Failures at the bootstrapper-source boundary
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Zero rows extracted from a fetched document. Signals page-format
    /// drift or a broken fetch; never retried.
    #[error("No bootstrapper rows extracted from {url}")]
    NoBootstrappers { url: String },
}

/// User-facing resolution failures
///
/// Display output is the exact message reported on stderr.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Given version does not match format major.minor[.patch]: {0}")]
    Format(String),

    #[error("Given major version is not in [16, 17, 18]: {0}")]
    UnsupportedMajor(String),

    #[error("Given minor version does not exist: {major}.{minor}")]
    UnknownMinor { major: String, minor: String },

    #[error("Given version does not exist: {major}.{minor}.{patch}")]
    UnknownPatch {
        major: String,
        minor: String,
        patch: String,
    },

    #[error(transparent)]
    Source(#[from] SourceError),
}
