//! Software request — a user-initiated install awaiting approval.

use serde::{Deserialize, Serialize};

use crate::error::{DeviceDeskError, ValidationError};
use crate::id::DeviceId;

/// Version recorded when the caller does not ask for a specific one.
pub const DEFAULT_SOFTWARE_VERSION: &str = "latest";

/// Lifecycle state of a [`SoftwareRequest`].
///
/// Requests are only ever created; approval happens outside this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    PendingApproval,
}

/// A request to install software on a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareRequest {
    pub device_id: DeviceId,
    pub software_name: String,
    pub software_version: String,
    pub status: RequestStatus,
}

impl SoftwareRequest {
    /// Create a new request in [`RequestStatus::PendingApproval`].
    ///
    /// A missing `version` is recorded as [`DEFAULT_SOFTWARE_VERSION`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingSoftwareName`] when `software_name`
    /// is absent or blank.
    pub fn pending(
        device_id: DeviceId,
        software_name: Option<String>,
        version: Option<String>,
    ) -> Result<Self, DeviceDeskError> {
        let software_name = software_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ValidationError::MissingSoftwareName)?;

        Ok(Self {
            device_id,
            software_name,
            software_version: version.unwrap_or_else(|| DEFAULT_SOFTWARE_VERSION.to_string()),
            status: RequestStatus::PendingApproval,
        })
    }
}
