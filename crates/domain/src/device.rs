//! Device — an endpoint (laptop, phone) registered to a user.

use serde::{Deserialize, Serialize};

use crate::error::{DeviceDeskError, ValidationError};
use crate::id::DeviceId;

/// Form factor of a [`Device`].
///
/// The built-in inventory only uses `Laptop` and `Mobile`; `Desktop` and
/// `Tablet` exist for operator-supplied seed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    Laptop,
    Mobile,
    Desktop,
    Tablet,
}

/// A registered endpoint belonging to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub device_id: DeviceId,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub model: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDeskError::Validation`] when `device_id` or `model`
    /// is empty.
    pub fn validate(&self) -> Result<(), DeviceDeskError> {
        if self.device_id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyDeviceId.into());
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    device_id: Option<DeviceId>,
    kind: Option<DeviceKind>,
    model: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn device_id(mut self, device_id: impl Into<DeviceId>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDeskError::Validation`] if `kind` was never set, or if
    /// `device_id` or `model` is missing or empty.
    pub fn build(self) -> Result<Device, DeviceDeskError> {
        let kind = self.kind.ok_or(ValidationError::MissingDeviceKind)?;
        let device = Device {
            device_id: self.device_id.unwrap_or_else(|| DeviceId::new("")),
            kind,
            model: self.model.unwrap_or_default(),
        };
        device.validate()?;
        Ok(device)
    }
}
