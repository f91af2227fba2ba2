//! Typed identifier newtypes.
//!
//! User and device identifiers are opaque strings handed out by the upstream
//! inventory. Request identifiers are allocated locally from a monotonic
//! counter and rendered as `req_<n>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Identifier of a user owning one or more devices.
    UserId
);

define_id!(
    /// Identifier of a [`Device`](crate::device::Device).
    DeviceId
);

const REQUEST_ID_PREFIX: &str = "req_";

/// Identifier of a [`SoftwareRequest`](crate::software_request::SoftwareRequest).
///
/// Sequence numbers start at 1. Ordering follows the sequence number, so ids
/// issued later always compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// The first id handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw sequence number.
    #[must_use]
    pub fn from_sequence(sequence: u64) -> Self {
        Self(sequence)
    }

    /// The raw sequence number.
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }

    /// The id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REQUEST_ID_PREFIX}{}", self.0)
    }
}

/// Error returned when a string is not a `req_<n>` identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid request id: {0:?}")]
pub struct ParseRequestIdError(String);

impl FromStr for RequestId {
    type Err = ParseRequestIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(REQUEST_ID_PREFIX)
            .and_then(|digits| digits.parse::<u64>().ok())
            .filter(|sequence| *sequence > 0)
            .map(Self)
            .ok_or_else(|| ParseRequestIdError(s.to_string()))
    }
}

impl Serialize for RequestId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RequestId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
