//! Fixed-table source backed by an in-memory union table

use crate::source::provider::BootstrapperSource;
use crate::version::error::SourceError;
use crate::version::types::{BootstrapperTable, MajorLine};

/// Serves per-line slices of one pre-built union table
///
/// Backs offline use of an archived table, and doubles as a deterministic
/// source in tests. Never touches the network.
pub struct FixedTableSource {
    table: BootstrapperTable,
}

impl FixedTableSource {
    pub fn new(table: BootstrapperTable) -> Self {
        Self { table }
    }
}

#[async_trait::async_trait]
impl BootstrapperSource for FixedTableSource {
    async fn bootstrappers(&self, line: MajorLine) -> Result<BootstrapperTable, SourceError> {
        let prefix = format!("{}.", line.major());
        Ok(self
            .table
            .iter()
            .filter(|(version, _)| version.starts_with(&prefix))
            .collect())
    }
}
