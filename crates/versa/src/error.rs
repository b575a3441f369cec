//! Error type for version construction and mutation

use thiserror::Error;

use crate::Component;

/// Errors raised while building, mutating or comparing a [`crate::Version`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Version input must be a string or a structured record, got {found}")]
    InvalidInputType { found: &'static str },
    #[error("Malformed version string \"{0}\"")]
    MalformedVersion(String),
    #[error("Invalid {component} value \"{value}\": expected a non-negative integer")]
    InvalidComponentValue { component: Component, value: String },
    #[error("Invalid {section} identifier \"{identifier}\"")]
    InvalidIdentifier {
        section: &'static str,
        identifier: String,
    },
    #[error("{component} {current} cannot be changed by {delta}: out of range")]
    ComponentOutOfRange {
        component: Component,
        current: u64,
        delta: String,
    },
    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),
}

pub type Result<T> = std::result::Result<T, VersionError>;
