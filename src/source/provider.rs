//! Source trait for obtaining bootstrapper tables

#[cfg(test)]
use mockall::automock;

use crate::version::error::SourceError;
use crate::version::types::{BootstrapperTable, MajorLine};

/// Capability for obtaining the bootstrapper table of a major line
///
/// The production implementation scrapes the line's release-history page;
/// fixed-table implementations back tests and offline use.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BootstrapperSource: Send + Sync {
    /// Returns the version -> bootstrapper-URL table for `line`
    ///
    /// Each call may perform one retrieval; nothing is cached across calls.
    async fn bootstrappers(&self, line: MajorLine) -> Result<BootstrapperTable, SourceError>;
}
