//! Seed data for the device inventory.
//!
//! The inventory is read once at startup and never mutated afterwards. The
//! document layout is:
//!
//! ```json
//! {
//!   "users":    { "<user_id>": [ { "device_id": "…", "type": "Laptop", "model": "…" } ] },
//!   "statuses": { "<device_id>": { "status": "compliant", "last_seen": "…", "os_version": "…" } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use devicedesk_domain::device::Device;
use devicedesk_domain::device_status::DeviceStatus;
use devicedesk_domain::id::{DeviceId, UserId};

use crate::error::SeedError;

const BUILTIN_SEED: &str = include_str!("../seed.json");

/// Parsed, validated seed document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: BTreeMap<UserId, Vec<Device>>,
    pub statuses: BTreeMap<DeviceId, DeviceStatus>,
}

impl SeedData {
    /// The inventory shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the embedded document is malformed.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Read an operator-supplied seed file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] if the file cannot be read, or a parse or
    /// validation error for its contents.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] for malformed JSON and
    /// [`SeedError::InvalidDevice`] when a device fails validation.
    pub fn from_json(content: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(content)?;
        seed.validate()?;
        Ok(seed)
    }

    fn validate(&self) -> Result<(), SeedError> {
        for (user_id, devices) in &self.users {
            for device in devices {
                device.validate().map_err(|source| SeedError::InvalidDevice {
                    user_id: user_id.to_string(),
                    source,
                })?;
                if !self.statuses.contains_key(&device.device_id) {
                    tracing::warn!(
                        user_id = %user_id,
                        device_id = %device.device_id,
                        "seeded device has no status; software requests for it will be rejected"
                    );
                }
            }
        }
        Ok(())
    }
}
