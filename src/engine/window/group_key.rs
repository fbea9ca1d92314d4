use std::fmt;

use serde::Serialize;

/// Value a statement partitions its counts by.
///
/// The null group is a regular key, not a sentinel string, so an empty string
/// and an absent attribute never collide. Ordering is total: null sorts before
/// every string, strings compare lexicographically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupKey(Option<String>);

impl GroupKey {
    pub fn null() -> Self {
        Self(None)
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<Option<String>> for GroupKey {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<Option<&str>> for GroupKey {
    fn from(value: Option<&str>) -> Self {
        Self(value.map(str::to_string))
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self::value(value)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "(null)"),
        }
    }
}
