//! The semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::component::{parse_component, Component, IntoComponent};
use crate::error::{Result, VersionError};
use crate::identifiers::{
    validate_metadata, validate_prerelease, Identifiers, METADATA_MARKER, PRERELEASE_MARKER,
};
use crate::input::{Components, VersionInput};
use crate::operator::Operator;

lazy_static! {
    // One optional leading letter (e.g. `v`), then MAJOR.MINOR.PATCH with
    // optional prerelease and build metadata sections. Letter classes cover
    // both cases, so no case-insensitive flag is needed. Multi-line: the
    // first matching line wins.
    static ref VERSION_RE: Regex = Regex::new(concat!(
        r"(?mR)^[A-Za-z]?",
        r"(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)",
        r"(?P<prerelease>-(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*))*)?",
        r"(?P<metadata>\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$",
    ))
    .unwrap();
}

/// A semantic version: `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]`.
///
/// Precedence (`is_less_than`, `cmp_precedence`, ...) only looks at the
/// numeric triple. `==` is structural and therefore matches
/// `is_equal_to(other, true)`, which is why `Version` has no `Ord` impl.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VersionInput", into = "Components")]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Identifiers,
    metadata: Identifiers,
}

impl Version {
    /// Build a version from either a SemVer string or a structured record
    pub fn new(input: impl Into<VersionInput>) -> Result<Self> {
        match input.into() {
            VersionInput::Text(text) => Self::parse(&text),
            VersionInput::Record(components) => Self::from_components(components),
        }
    }

    /// Parse a SemVer string, optionally prefixed by a single letter such as `v`
    pub fn parse(text: &str) -> Result<Self> {
        let captures = VERSION_RE.captures(text).ok_or_else(|| {
            log::debug!("Rejected malformed version string {:?}", text);
            VersionError::MalformedVersion(text.to_string())
        })?;

        // The numeric groups are mandatory, so they exist on every match.
        let numeric = |component: Component| {
            let value = captures.name(component.as_str()).map_or("", |m| m.as_str());
            parse_component(component, value)
        };
        let section = |name: &str| {
            captures
                .name(name)
                .map_or_else(Identifiers::empty, |m| Identifiers::from_raw(m.as_str()))
        };

        let version = Version {
            major: numeric(Component::Major)?,
            minor: numeric(Component::Minor)?,
            patch: numeric(Component::Patch)?,
            prerelease: section("prerelease"),
            metadata: section("metadata"),
        };

        log::trace!("Parsed {:?} as {}", text, version);
        Ok(version)
    }

    /// Build a version from a structured record, validating its identifiers
    pub fn from_components(components: Components) -> Result<Self> {
        validate_prerelease(&components.prerelease)?;
        validate_metadata(&components.metadata)?;

        Ok(Version {
            major: components.major,
            minor: components.minor,
            patch: components.patch,
            prerelease: Identifiers::from_segments(PRERELEASE_MARKER, components.prerelease),
            metadata: Identifiers::from_segments(METADATA_MARKER, components.metadata),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> &Identifiers {
        &self.prerelease
    }

    pub fn metadata(&self) -> &Identifiers {
        &self.metadata
    }

    pub fn get(&self, component: Component) -> u64 {
        match component {
            Component::Major => self.major,
            Component::Minor => self.minor,
            Component::Patch => self.patch,
        }
    }

    fn get_mut(&mut self, component: Component) -> &mut u64 {
        match component {
            Component::Major => &mut self.major,
            Component::Minor => &mut self.minor,
            Component::Patch => &mut self.patch,
        }
    }

    /// Replace a component. The version is unchanged if `value` is invalid.
    pub fn set<V: IntoComponent>(&mut self, component: Component, value: V) -> Result<()> {
        let value = value.into_component(component)?;
        let slot = self.get_mut(component);
        log::trace!("Setting {} from {} to {}", component, slot, value);
        *slot = value;
        Ok(())
    }

    /// Add to a component, failing on overflow
    pub fn add<V: IntoComponent>(&mut self, component: Component, value: V) -> Result<()> {
        let delta = value.into_component(component)?;
        let current = self.get(component);
        let next = current
            .checked_add(delta)
            .ok_or_else(|| VersionError::ComponentOutOfRange {
                component,
                current,
                delta: format!("+{}", delta),
            })?;
        log::trace!("Adding {} to {}: {} -> {}", delta, component, current, next);
        *self.get_mut(component) = next;
        Ok(())
    }

    /// Subtract from a component, failing if the result would be negative
    pub fn sub<V: IntoComponent>(&mut self, component: Component, value: V) -> Result<()> {
        let delta = value.into_component(component)?;
        let current = self.get(component);
        let next = current
            .checked_sub(delta)
            .ok_or_else(|| VersionError::ComponentOutOfRange {
                component,
                current,
                delta: format!("-{}", delta),
            })?;
        log::trace!("Subtracting {} from {}: {} -> {}", delta, component, current, next);
        *self.get_mut(component) = next;
        Ok(())
    }

    pub fn set_major<V: IntoComponent>(&mut self, value: V) -> Result<()> {
        self.set(Component::Major, value)
    }

    pub fn add_major<V: IntoComponent>(&mut self, value: V) -> Result<()> {
        self.add(Component::Major, value)
    }

    pub fn sub_major<V: IntoComponent>(&mut self, value: V) -> Result<()> {
        self.sub(Component::Major, value)
    }

    /// Add exactly one to the major component
    pub fn increment_major(&mut self) -> Result<()> {
        self.add(Component::Major, 1u64)
    }

    /// Subtract exactly one from the major component
    pub fn decrement_major(&mut self) -> Result<()> {
        self.sub(Component::Major, 1u64)
    }

    pub fn set_minor<V: IntoComponent>(&mut self, value: V) -> Result<()> {
        self.set(Component::Minor, value)
    }

    pub fn add_minor<V: IntoComponent>(&mut self, value: V) -> Result<()> {
        self.add(Component::Minor, value)
    }

    pub fn sub_minor<V: IntoComponent>(&mut self, value: V) -> Result<()> {
        self.sub(Component::Minor, value)
    }

    /// Add exactly one to the minor component
    pub fn increment_minor(&mut self) -> Result<()> {
        self.add(Component::Minor, 1u64)
    }

    /// Subtract exactly one from the minor component
    pub fn decrement_minor(&mut self) -> Result<()> {
        self.sub(Component::Minor, 1u64)
    }

    pub fn set_patch<V: IntoComponent>(&mut self, value: V) -> Result<()> {
        self.set(Component::Patch, value)
    }

    pub fn add_patch<V: IntoComponent>(&mut self, value: V) -> Result<()> {
        self.add(Component::Patch, value)
    }

    pub fn sub_patch<V: IntoComponent>(&mut self, value: V) -> Result<()> {
        self.sub(Component::Patch, value)
    }

    /// Add exactly one to the patch component
    pub fn increment_patch(&mut self) -> Result<()> {
        self.add(Component::Patch, 1u64)
    }

    /// Subtract exactly one from the patch component
    pub fn decrement_patch(&mut self) -> Result<()> {
        self.sub(Component::Patch, 1u64)
    }

    /// Order two versions by `(major, minor, patch)`.
    ///
    /// Prerelease and metadata never take part in precedence.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }

    pub fn is_greater_than(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Greater
    }

    pub fn is_less_than(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Less
    }

    /// Check whether two versions share major, minor and patch.
    ///
    /// With `precise`, the prerelease and metadata segments must match too.
    pub fn is_equal_to(&self, other: &Version, precise: bool) -> bool {
        if self.cmp_precedence(other) != Ordering::Equal {
            return false;
        }

        !precise
            || (self.prerelease.data() == other.prerelease.data()
                && self.metadata.data() == other.metadata.data())
    }

    pub fn is_equal_or_less_than(&self, other: &Version, precise: bool) -> bool {
        self.is_less_than(other) || self.is_equal_to(other, precise)
    }

    pub fn is_equal_or_greater_than(&self, other: &Version, precise: bool) -> bool {
        self.is_greater_than(other) || self.is_equal_to(other, precise)
    }

    /// Compare this version to `other` using the given operator
    pub fn compare(&self, other: &Version, operator: Operator, precise: bool) -> bool {
        match operator {
            Operator::Equal => self.is_equal_to(other, precise),
            Operator::NotEqual => !self.is_equal_to(other, precise),
            Operator::LessThan => self.is_less_than(other),
            Operator::LessThanOrEqual => self.is_equal_or_less_than(other, precise),
            Operator::GreaterThan => self.is_greater_than(other),
            Operator::GreaterThanOrEqual => self.is_equal_or_greater_than(other, precise),
        }
    }

    /// Render with both separators always present, e.g. `1.2.3-+` for a bare
    /// version. [`fmt::Display`] omits empty sections instead.
    pub fn to_literal_string(&self) -> String {
        format!(
            "{}.{}.{}{}{}{}{}",
            self.major,
            self.minor,
            self.patch,
            PRERELEASE_MARKER,
            self.prerelease.joined(),
            METADATA_MARKER,
            self.metadata.joined()
        )
    }

    pub fn to_components(&self) -> Components {
        Components {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease: self.prerelease.data().to_vec(),
            metadata: self.metadata.data().to_vec(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "{}{}", PRERELEASE_MARKER, self.prerelease.joined())?;
        }
        if !self.metadata.is_empty() {
            write!(f, "{}{}", METADATA_MARKER, self.metadata.joined())?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(text: String) -> Result<Self> {
        Self::parse(&text)
    }
}

impl TryFrom<Components> for Version {
    type Error = VersionError;

    fn try_from(components: Components) -> Result<Self> {
        Self::from_components(components)
    }
}

impl TryFrom<VersionInput> for Version {
    type Error = VersionError;

    fn try_from(input: VersionInput) -> Result<Self> {
        Self::new(input)
    }
}

impl TryFrom<serde_json::Value> for Version {
    type Error = VersionError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Self::new(VersionInput::try_from(value)?)
    }
}

impl From<Version> for Components {
    fn from(version: Version) -> Self {
        Components {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            prerelease: version.prerelease.into_data(),
            metadata: version.metadata.into_data(),
        }
    }
}
