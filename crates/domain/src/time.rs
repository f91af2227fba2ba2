//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `last_seen`.
///
/// Serializes as RFC 3339 with a `Z` suffix, e.g. `2025-05-17T10:00:00Z`.
pub type Timestamp = DateTime<Utc>;
