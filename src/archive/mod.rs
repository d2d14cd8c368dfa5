//! Bootstrapper archive generation
//!
//! Batch mode: scrape every major line, union the tables, and render a
//! generated Rust source file for offline reuse through
//! [`crate::source::fixed::FixedTableSource`].

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::source::provider::BootstrapperSource;
use crate::version::error::SourceError;
use crate::version::types::{BootstrapperTable, MajorLine};

/// Collects the tables for all major lines into one union, first-wins per
/// version string. Versions do not collide across lines in practice.
pub async fn collect_all(
    source: &dyn BootstrapperSource,
) -> Result<BootstrapperTable, SourceError> {
    let mut union = BootstrapperTable::new();
    for line in MajorLine::ALL {
        let table = source.bootstrappers(line).await?;
        info!("collected {} bootstrappers for major {}", table.len(), line);
        union.merge_first_wins(table);
    }
    Ok(union)
}

/// Renders the union table as Rust source with a generation-timestamp comment
pub fn render(table: &BootstrapperTable, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "// Generated on {}",
        generated_at.format("%Y-%m-%dT%H:%M:%S")
    );
    out.push_str("pub static BOOTSTRAPPERS: &[(&str, &str)] = &[\n");
    for (version, url) in table.iter() {
        let _ = writeln!(out, "    (\"{version}\", \"{url}\"),");
    }
    out.push_str("];\n");
    out
}

/// Writes rendered contents to `path`, creating parent directories
pub fn write_archive(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
