//! Numeric version components and value coercion

use std::fmt;

use crate::error::{Result, VersionError};

/// One of the three numeric parts of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }

    pub fn all() -> [Component; 3] {
        [Component::Major, Component::Minor, Component::Patch]
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a textual component value such as `"10"` into an integer.
///
/// Surrounding whitespace is ignored and leading zeros are tolerated, but the
/// value must otherwise consist of ASCII digits and fit in a `u64`. Signs,
/// fractions and trailing garbage are rejected.
pub fn parse_component(component: Component, value: &str) -> Result<u64> {
    let trimmed = value.trim();
    let invalid = || VersionError::InvalidComponentValue {
        component,
        value: value.to_string(),
    };

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    trimmed.parse::<u64>().map_err(|_| invalid())
}

/// Values accepted by the component mutators: integers or numeric strings
pub trait IntoComponent {
    fn into_component(self, component: Component) -> Result<u64>;
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl IntoComponent for $ty {
                fn into_component(self, _component: Component) -> Result<u64> {
                    Ok(self as u64)
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl IntoComponent for $ty {
                fn into_component(self, component: Component) -> Result<u64> {
                    u64::try_from(self).map_err(|_| VersionError::InvalidComponentValue {
                        component,
                        value: self.to_string(),
                    })
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);

impl IntoComponent for &str {
    fn into_component(self, component: Component) -> Result<u64> {
        parse_component(component, self)
    }
}

impl IntoComponent for String {
    fn into_component(self, component: Component) -> Result<u64> {
        parse_component(component, &self)
    }
}

impl IntoComponent for &String {
    fn into_component(self, component: Component) -> Result<u64> {
        parse_component(component, self)
    }
}
