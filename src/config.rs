use crate::version::types::MajorLine;

/// User agent sent with every release-history fetch
pub const USER_AGENT: &str = "vsbt";

/// Default output path for the generated bootstrapper table
pub const DEFAULT_ARCHIVE_PATH: &str = "generated/bootstrappers.rs";

/// Path of a line's release-history document under the docs host.
/// The 2019 page predates the "release-history" slug.
pub fn history_path(line: MajorLine) -> &'static str {
    match line {
        MajorLine::Vs2019 => "/en-us/visualstudio/releases/2019/history",
        MajorLine::Vs2022 => "/en-us/visualstudio/releases/2022/release-history",
        MajorLine::Vs2026 => "/en-us/visualstudio/releases/2026/release-history",
    }
}

/// Versions that have been on each line's page for years. A missing sentinel
/// after an otherwise successful extraction is a heuristic signal that the
/// page format drifted.
pub fn sentinel_versions(line: MajorLine) -> &'static [&'static str] {
    match line {
        MajorLine::Vs2019 => &["16.0.0", "16.3.1", "16.8.7", "16.10.0", "16.11.53"],
        MajorLine::Vs2022 => &["17.0.0", "17.2.20", "17.7.5", "17.13.3", "17.14.23"],
        MajorLine::Vs2026 => &["18.0.0", "18.1.1"],
    }
}
