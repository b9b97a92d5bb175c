//! Error type shared by the loader, counter, resolver and aggregator.

use thiserror::Error;

/// Failure while comparing word lists.
///
/// Whether a variant is fatal depends on where it happens: the same
/// `Unreachable` that aborts a request when loading the reference list is
/// downgraded to a `-1` entry when it happens for a candidate.
#[derive(Debug, Error)]
pub enum CollideError {
    /// Transport failure, non-200 status, or a read error mid-body.
    #[error("{locator}: resource is unreachable ({reason})")]
    Unreachable { locator: String, reason: String },

    /// A line contains a character outside the accepted alphabet, or is empty.
    #[error("{line:?}: line is not a valid word in {locator}")]
    InvalidContent { line: String, locator: String },

    /// No file name can be derived from the locator.
    #[error("{locator}: cannot find a file name in this locator")]
    InvalidLocator { locator: String },

    /// The global deadline elapsed before every candidate reported.
    #[error("timeout: operation aborted after {secs:.1}s")]
    Timeout { secs: f64 },

    /// The result mapping could not be encoded as JSON.
    #[error("failed to serialize result mapping: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CollideError {
    pub(crate) fn unreachable(locator: &str, reason: impl ToString) -> Self {
        CollideError::Unreachable {
            locator: locator.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = CollideError> = std::result::Result<T, E>;
