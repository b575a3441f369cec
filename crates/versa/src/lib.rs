//! Semantic version value type
//!
//! This crate parses `MAJOR.MINOR.PATCH[-PRERELEASE][+METADATA]` strings or
//! structured records into a [`Version`], mutates its numeric components in
//! place and compares versions by their `(major, minor, patch)` precedence.

mod component;
mod error;
mod identifiers;
mod input;
mod operator;
mod version;


pub use component::{parse_component, Component, IntoComponent};
pub use error::{Result, VersionError};
pub use identifiers::Identifiers;
pub use input::{Components, VersionInput};
pub use operator::Operator;
pub use version::Version;
