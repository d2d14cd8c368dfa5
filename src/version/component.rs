//! Installer component ID derivation

use crate::version::types::{MajorLine, ResolvedVersion};

/// Derives the installer component ID selecting the C++ Build Tools workload
/// for a resolved version.
///
/// The numbering is irregular across lines: VS 2026 and 2022 advance the
/// toolset number with the minor version, while VS 2019 pinned it at 14.28
/// for minors 8-9 and 14.29 for minors 10-11. The table is kept explicit
/// rather than smoothed into a formula; new releases may need new cases.
///
/// # Panics
///
/// Panics if `v.minor` is outside the known bounds of its line (17.x up to
/// minor 14, 16.x up to minor 11). The resolver only produces versions listed
/// on the official release-history pages, so a violation means this numbering
/// table is stale, not that the input was bad.
pub fn buildtools_component_id(v: &ResolvedVersion) -> String {
    let tag = match v.line {
        MajorLine::Vs2026 => format!("14.{}.18.{}", v.minor + 50, v.minor),
        MajorLine::Vs2022 => {
            assert!(v.minor <= 14, "no component numbering for 17.{}", v.minor);
            format!("14.{}.17.{}", v.minor + 30, v.minor)
        }
        MajorLine::Vs2019 => {
            assert!(v.minor <= 11, "no component numbering for 16.{}", v.minor);
            match v.minor {
                10 | 11 => format!("14.29.16.{}", v.minor),
                8 | 9 => format!("14.28.16.{}", v.minor),
                // single digit, so "2{minor}" stays two digits
                minor => format!("14.2{minor}.16.{minor}"),
            }
        }
    };

    format!("Microsoft.VisualStudio.Component.VC.{tag}.x86.x64")
}
