//! Prerelease and build metadata sections

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, VersionError};

pub(crate) const PRERELEASE_MARKER: char = '-';
pub(crate) const METADATA_MARKER: char = '+';

lazy_static! {
    static ref PRERELEASE_IDENTIFIER_RE: Regex =
        Regex::new(r"^(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)$").unwrap();

    static ref METADATA_IDENTIFIER_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+$").unwrap();
}

/// A dot-separated identifier section of a version.
///
/// `raw` keeps the section exactly as it appears in a version string,
/// including its leading marker (`-` or `+`). `data` holds the individual
/// segments in order. An empty section has no `raw` and no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Identifiers {
    raw: Option<String>,
    data: Vec<String>,
}

impl Identifiers {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a section from its matched text, marker included
    pub(crate) fn from_raw(raw: &str) -> Self {
        let body = raw
            .strip_prefix([PRERELEASE_MARKER, METADATA_MARKER])
            .unwrap_or(raw);

        if body.is_empty() {
            return Self::empty();
        }

        Identifiers {
            raw: Some(raw.to_string()),
            data: body.split('.').map(str::to_string).collect(),
        }
    }

    /// Build a section from segments, deriving `raw` from the marker
    pub(crate) fn from_segments(marker: char, segments: Vec<String>) -> Self {
        if segments.is_empty() {
            return Self::empty();
        }

        Identifiers {
            raw: Some(format!("{}{}", marker, segments.join("."))),
            data: segments,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn data(&self) -> &[String] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Vec<String> {
        self.data
    }

    /// Segments joined with `.`, without the marker
    pub fn joined(&self) -> String {
        self.data.join(".")
    }
}

pub(crate) fn validate_prerelease(segments: &[String]) -> Result<()> {
    validate(segments, &PRERELEASE_IDENTIFIER_RE, "prerelease")
}

pub(crate) fn validate_metadata(segments: &[String]) -> Result<()> {
    validate(segments, &METADATA_IDENTIFIER_RE, "metadata")
}

fn validate(segments: &[String], pattern: &Regex, section: &'static str) -> Result<()> {
    match segments.iter().find(|segment| !pattern.is_match(segment)) {
        Some(segment) => Err(VersionError::InvalidIdentifier {
            section,
            identifier: segment.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_raw() {
        let section = Identifiers::from_raw("-prerelease.beta");
        assert_eq!(section.raw(), Some("-prerelease.beta"));
        assert_eq!(section.data(), &["prerelease", "beta"]);

        let section = Identifiers::from_raw("+build.001");
        assert_eq!(section.raw(), Some("+build.001"));
        assert_eq!(section.data(), &["build", "001"]);
    }

    #[test]
    fn test_from_segments() {
        let section =
            Identifiers::from_segments(METADATA_MARKER, strings(&["metadata", "otherdata"]));
        assert_eq!(section.raw(), Some("+metadata.otherdata"));
        assert_eq!(section.joined(), "metadata.otherdata");

        let section = Identifiers::from_segments(PRERELEASE_MARKER, Vec::new());
        assert_eq!(section.raw(), None);
        assert!(section.data().is_empty());
        assert_eq!(section, Identifiers::empty());
    }

    #[test]
    fn test_validate_prerelease() {
        assert!(validate_prerelease(&strings(&["alpha", "1", "0", "x-y-z", "0a", "--"])).is_ok());

        for bad in ["01", "", "be ta", "beta!", "ünicode"] {
            assert_eq!(
                validate_prerelease(&strings(&["alpha", bad])),
                Err(VersionError::InvalidIdentifier {
                    section: "prerelease",
                    identifier: bad.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_validate_metadata() {
        assert!(validate_metadata(&strings(&["001", "sha-5114f85", "exp"])).is_ok());
        assert!(validate_metadata(&strings(&[""])).is_err());
        assert!(validate_metadata(&strings(&["a+b"])).is_err());
    }
}
