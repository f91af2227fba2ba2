//! Device service — use-cases for querying the device inventory.

use devicedesk_domain::device::Device;
use devicedesk_domain::device_status::DeviceStatus;
use devicedesk_domain::error::{DeviceDeskError, NotFoundError};
use devicedesk_domain::id::{DeviceId, UserId};

use crate::ports::DeviceRepository;

/// Application service for device lookups.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List the devices registered to a user.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDeskError::NotFound`] when the user is unknown, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_user_devices(&self, user_id: &UserId) -> Result<Vec<Device>, DeviceDeskError> {
        self.repo.find_by_user(user_id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: user_id.to_string(),
            }
            .into()
        })
    }

    /// Report the compliance status of a device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDeskError::NotFound`] when the device is unknown, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device_status(
        &self,
        device_id: &DeviceId,
    ) -> Result<DeviceStatus, DeviceDeskError> {
        self.repo.get_status(device_id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: device_id.to_string(),
            }
            .into()
        })
    }
}
