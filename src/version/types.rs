//! Common types for version resolution

use std::fmt;

use indexmap::IndexMap;

/// A Visual Studio product generation with its own release-history document
/// and component-numbering rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorLine {
    /// Visual Studio 2019 (major 16)
    Vs2019,
    /// Visual Studio 2022 (major 17)
    Vs2022,
    /// Visual Studio 2026 (major 18)
    Vs2026,
}

impl MajorLine {
    /// All supported lines, in archive order
    pub const ALL: [MajorLine; 3] = [MajorLine::Vs2019, MajorLine::Vs2022, MajorLine::Vs2026];

    /// Numeric major version of this line
    pub fn major(&self) -> u32 {
        match self {
            MajorLine::Vs2019 => 16,
            MajorLine::Vs2022 => 17,
            MajorLine::Vs2026 => 18,
        }
    }

    /// Maps a raw major capture to its line.
    ///
    /// Deliberately an exact string match, so inputs like "016" are rejected
    /// even though they parse to a supported number.
    pub fn from_major_str(s: &str) -> Option<MajorLine> {
        match s {
            "16" => Some(MajorLine::Vs2019),
            "17" => Some(MajorLine::Vs2022),
            "18" => Some(MajorLine::Vs2026),
            _ => None,
        }
    }
}

impl fmt::Display for MajorLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major())
    }
}

/// Mapping from exact version string ("major.minor.patch") to the
/// bootstrapper download URL, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapperTable {
    entries: IndexMap<String, String>,
}

impl BootstrapperTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry unless the version is already present, returning
    /// whether it was inserted.
    ///
    /// Release-history pages list some versions twice (an LTSC entry next to
    /// a current one); the first URL encountered is the one kept.
    pub fn insert_first(&mut self, version: impl Into<String>, url: impl Into<String>) -> bool {
        match self.entries.entry(version.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(url.into());
                true
            }
        }
    }

    /// First-wins union with another table
    pub fn merge_first_wins(&mut self, other: BootstrapperTable) {
        for (version, url) in other.entries {
            self.insert_first(version, url);
        }
    }

    pub fn get(&self, version: &str) -> Option<&str> {
        self.entries.get(version).map(String::as_str)
    }

    pub fn contains(&self, version: &str) -> bool {
        self.entries.contains_key(version)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(v, u)| (v.as_str(), u.as_str()))
    }
}

impl<V: Into<String>, U: Into<String>> FromIterator<(V, U)> for BootstrapperTable {
    fn from_iter<I: IntoIterator<Item = (V, U)>>(iter: I) -> Self {
        let mut table = BootstrapperTable::new();
        for (version, url) in iter {
            table.insert_first(version, url);
        }
        table
    }
}

/// A validated version carrying its bootstrapper URL
///
/// A value type: constructed once by the resolver, read-only thereafter.
/// Rendering yields "major.minor.patch".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub line: MajorLine,
    pub minor: u32,
    pub patch: u32,
    pub bootstrapper: String,
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.line.major(), self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("16", Some(MajorLine::Vs2019))]
    #[case("17", Some(MajorLine::Vs2022))]
    #[case("18", Some(MajorLine::Vs2026))]
    #[case("15", None)]
    #[case("19", None)]
    #[case("016", None)]
    #[case("17 ", None)]
    fn from_major_str_accepts_exact_supported_majors(
        #[case] raw: &str,
        #[case] expected: Option<MajorLine>,
    ) {
        assert_eq!(MajorLine::from_major_str(raw), expected);
    }

    #[test]
    fn insert_first_keeps_the_first_url_for_a_version() {
        let mut table = BootstrapperTable::new();
        assert!(table.insert_first("16.11.53", "https://example.com/ltsc.exe"));
        assert!(!table.insert_first("16.11.53", "https://example.com/current.exe"));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("16.11.53"), Some("https://example.com/ltsc.exe"));
    }

    #[test]
    fn merge_first_wins_does_not_overwrite_existing_versions() {
        let mut union: BootstrapperTable = [("17.0.0", "https://a.example/one.exe")]
            .into_iter()
            .collect();
        let other: BootstrapperTable = [
            ("17.0.0", "https://b.example/two.exe"),
            ("18.0.0", "https://b.example/three.exe"),
        ]
        .into_iter()
        .collect();

        union.merge_first_wins(other);

        assert_eq!(union.get("17.0.0"), Some("https://a.example/one.exe"));
        assert_eq!(union.get("18.0.0"), Some("https://b.example/three.exe"));
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let table: BootstrapperTable = [
            ("17.14.23", "https://example.com/a.exe"),
            ("17.14.22", "https://example.com/b.exe"),
            ("17.0.0", "https://example.com/c.exe"),
        ]
        .into_iter()
        .collect();

        let versions: Vec<&str> = table.iter().map(|(v, _)| v).collect();
        assert_eq!(versions, vec!["17.14.23", "17.14.22", "17.0.0"]);
    }

    #[test]
    fn resolved_version_renders_as_triple() {
        let version = ResolvedVersion {
            line: MajorLine::Vs2022,
            minor: 14,
            patch: 23,
            bootstrapper: "https://example.com/vs_buildtools.exe".to_string(),
        };

        assert_eq!(version.to_string(), "17.14.23");
    }
}
