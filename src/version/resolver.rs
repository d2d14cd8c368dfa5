//! Version resolution against bootstrapper tables
//!
//! Completes a user-supplied "{major}.{minor}[.{patch}]" string into an exact
//! version plus its bootstrapper URL. An omitted patch resolves to the highest
//! known patch for that minor line.

use regex::Regex;

use crate::source::provider::BootstrapperSource;
use crate::version::error::ResolveError;
use crate::version::types::{BootstrapperTable, MajorLine, ResolvedVersion};

/// Resolves version requests against the bootstrapper table of the matching
/// major line, obtained from an injected source
pub struct VersionResolver<'a> {
    source: &'a dyn BootstrapperSource,
    /// Grammar for user input: major and minor required, patch optional
    version_re: Regex,
}

impl<'a> VersionResolver<'a> {
    pub fn new(source: &'a dyn BootstrapperSource) -> Self {
        Self {
            source,
            version_re: Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").unwrap(),
        }
    }

    /// Validates and completes `raw` into an exact version.
    ///
    /// Format and major-line checks happen before any table fetch; the table
    /// is only obtained for a structurally valid request.
    pub async fn resolve(&self, raw: &str) -> Result<ResolvedVersion, ResolveError> {
        let captures = self
            .version_re
            .captures(raw)
            .ok_or_else(|| ResolveError::Format(raw.to_string()))?;

        let major = &captures[1];
        let line = MajorLine::from_major_str(major)
            .ok_or_else(|| ResolveError::UnsupportedMajor(major.to_string()))?;

        let table = self.source.bootstrappers(line).await?;

        let minor = &captures[2];
        let patch = captures.get(3).map(|m| m.as_str());
        resolve_in_table(&table, line, minor, patch)
    }
}

/// A table key whose major and minor components match the request
struct Candidate<'t> {
    minor: u32,
    patch_raw: &'t str,
    patch: u32,
    url: &'t str,
}

/// Table-level resolution, independent of how the table was obtained.
///
/// Minor matching compares version-string components, not numeric values, so
/// a request for "17.1" never picks up "17.14.x" rows and "17.05" stays
/// unknown even though 05 parses to 5. Patch selection is numeric when the
/// patch is omitted (so 10 beats 9) and a string-component match when it is
/// supplied.
pub fn resolve_in_table(
    table: &BootstrapperTable,
    line: MajorLine,
    minor: &str,
    patch: Option<&str>,
) -> Result<ResolvedVersion, ResolveError> {
    let major = line.major().to_string();

    let candidates: Vec<Candidate<'_>> = table
        .iter()
        .filter_map(|(version, url)| {
            let mut parts = version.splitn(3, '.');
            let (maj, min, pat) = (parts.next()?, parts.next()?, parts.next()?);
            if maj != major || min != minor {
                return None;
            }
            Some(Candidate {
                minor: min.parse().ok()?,
                patch_raw: pat,
                patch: pat.parse().ok()?,
                url,
            })
        })
        .collect();

    if candidates.is_empty() {
        return Err(ResolveError::UnknownMinor {
            major,
            minor: minor.to_string(),
        });
    }

    let chosen = match patch {
        // Highest known patch for this minor; versions are unique so there
        // are no ties
        None => candidates
            .iter()
            .max_by_key(|c| c.patch)
            .ok_or_else(|| ResolveError::UnknownMinor {
                major: major.clone(),
                minor: minor.to_string(),
            })?,
        Some(p) => candidates
            .iter()
            .find(|c| c.patch_raw == p)
            .ok_or_else(|| ResolveError::UnknownPatch {
                major: major.clone(),
                minor: minor.to_string(),
                patch: p.to_string(),
            })?,
    };

    Ok(ResolvedVersion {
        line,
        minor: chosen.minor,
        patch: chosen.patch,
        bootstrapper: chosen.url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::provider::MockBootstrapperSource;
    use crate::version::error::SourceError;
    use rstest::rstest;

    fn sample_table() -> BootstrapperTable {
        [
            ("17.14.23", "https://example.com/17.14.23.exe"),
            ("17.5.10", "https://example.com/17.5.10.exe"),
            ("17.5.2", "https://example.com/17.5.2.exe"),
            ("17.5.1", "https://example.com/17.5.1.exe"),
            ("17.1.5", "https://example.com/17.1.5.exe"),
            ("17.0.0", "https://example.com/17.0.0.exe"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn omitted_patch_resolves_to_numeric_maximum() {
        let resolved =
            resolve_in_table(&sample_table(), MajorLine::Vs2022, "5", None).unwrap();

        // 10 beats 2 and 1 numerically, even though "10" < "2" lexicographically
        assert_eq!(resolved.to_string(), "17.5.10");
        assert_eq!(resolved.bootstrapper, "https://example.com/17.5.10.exe");
    }

    #[test]
    fn explicit_patch_returns_exactly_that_entry() {
        let resolved =
            resolve_in_table(&sample_table(), MajorLine::Vs2022, "5", Some("2")).unwrap();

        assert_eq!(resolved.to_string(), "17.5.2");
        assert_eq!(resolved.bootstrapper, "https://example.com/17.5.2.exe");
    }

    #[test]
    fn minor_match_is_component_exact() {
        // "17.1" must not pick up the "17.14.23" row
        let resolved =
            resolve_in_table(&sample_table(), MajorLine::Vs2022, "1", None).unwrap();

        assert_eq!(resolved.to_string(), "17.1.5");
    }

    #[test]
    fn minor_match_compares_strings_not_numbers() {
        let result = resolve_in_table(&sample_table(), MajorLine::Vs2022, "05", None);

        assert!(matches!(
            result,
            Err(ResolveError::UnknownMinor { ref major, ref minor })
                if major == "17" && minor == "05"
        ));
    }

    #[test]
    fn unknown_minor_reports_major_dot_minor() {
        let err =
            resolve_in_table(&sample_table(), MajorLine::Vs2022, "99", None).unwrap_err();

        assert_eq!(err.to_string(), "Given minor version does not exist: 17.99");
    }

    #[test]
    fn unknown_patch_reports_full_triple() {
        let err = resolve_in_table(&sample_table(), MajorLine::Vs2022, "5", Some("999"))
            .unwrap_err();

        assert_eq!(err.to_string(), "Given version does not exist: 17.5.999");
    }

    #[test]
    fn round_trip_of_rendered_version_is_stable() {
        let table = sample_table();
        let first = resolve_in_table(&table, MajorLine::Vs2022, "5", None).unwrap();

        let rendered = first.to_string();
        let mut parts = rendered.splitn(3, '.');
        let (_, minor, patch) = (
            parts.next().unwrap(),
            parts.next().unwrap(),
            parts.next().unwrap(),
        );
        let second = resolve_in_table(&table, MajorLine::Vs2022, minor, Some(patch)).unwrap();

        assert_eq!(first, second);
    }

    #[rstest]
    #[case("16")] // missing minor
    #[case("17.")]
    #[case("17.5.")]
    #[case("v17.5")]
    #[case("17.5.2.1")]
    #[case("17.five")]
    #[case("")]
    #[tokio::test]
    async fn malformed_input_is_a_format_error(#[case] raw: &str) {
        // Format checking happens before any fetch, so an unconfigured mock
        // would panic if the source were consulted
        let source = MockBootstrapperSource::new();
        let resolver = VersionResolver::new(&source);

        let err = resolver.resolve(raw).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Given version does not match format major.minor[.patch]: {raw}")
        );
    }

    #[tokio::test]
    async fn unsupported_major_is_rejected_before_fetching() {
        let source = MockBootstrapperSource::new();
        let resolver = VersionResolver::new(&source);

        let err = resolver.resolve("15.0").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Given major version is not in [16, 17, 18]: 15"
        );
    }

    #[tokio::test]
    async fn resolve_fetches_the_table_for_the_requested_line() {
        let mut source = MockBootstrapperSource::new();
        source
            .expect_bootstrappers()
            .withf(|line| *line == MajorLine::Vs2022)
            .times(1)
            .returning(|_| Ok(sample_table()));
        let resolver = VersionResolver::new(&source);

        let resolved = resolver.resolve("17.5").await.unwrap();
        assert_eq!(resolved.to_string(), "17.5.10");
    }

    #[tokio::test]
    async fn source_failures_propagate() {
        let mut source = MockBootstrapperSource::new();
        source.expect_bootstrappers().returning(|_| {
            Err(SourceError::NoBootstrappers {
                url: "https://example.com/history".to_string(),
            })
        });
        let resolver = VersionResolver::new(&source);

        let err = resolver.resolve("17.5").await.unwrap_err();
        assert!(matches!(err, ResolveError::Source(_)));
    }
}
