//! Software request service — submit and look up install requests.

use devicedesk_domain::error::{DeviceDeskError, NotFoundError};
use devicedesk_domain::id::{DeviceId, RequestId};
use devicedesk_domain::software_request::SoftwareRequest;

use crate::ports::{DeviceRepository, SoftwareRequestRepository};

/// Fields supplied by a caller when asking for software.
///
/// Both fields are optional at this layer so that the presence check lives
/// with the rest of the domain validation.
#[derive(Debug, Default, Clone)]
pub struct SoftwareRequestDraft {
    pub software_name: Option<String>,
    pub version: Option<String>,
}

/// Application service for software requests.
///
/// Needs the device inventory to reject requests for unknown devices.
pub struct SoftwareRequestService<D, S> {
    devices: D,
    requests: S,
}

impl<D, S> SoftwareRequestService<D, S>
where
    D: DeviceRepository,
    S: SoftwareRequestRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(devices: D, requests: S) -> Self {
        Self { devices, requests }
    }

    /// Record a pending software request for a device.
    ///
    /// The device is checked before the draft, so an unknown device is
    /// reported even when the draft is also invalid.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDeskError::NotFound`] when the device is unknown,
    /// [`DeviceDeskError::Validation`] when the software name is missing, or a
    /// storage error from either repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn submit(
        &self,
        device_id: &DeviceId,
        draft: SoftwareRequestDraft,
    ) -> Result<(RequestId, SoftwareRequest), DeviceDeskError> {
        if self.devices.get_status(device_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Device",
                id: device_id.to_string(),
            }
            .into());
        }

        let request = SoftwareRequest::pending(device_id.clone(), draft.software_name, draft.version)?;
        let (id, stored) = self.requests.create(request).await?;
        tracing::info!(
            request_id = %id,
            software_name = %stored.software_name,
            software_version = %stored.software_version,
            "software request submitted"
        );
        Ok((id, stored))
    }

    /// Look up a previously submitted request.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDeskError::NotFound`] when no request has this id, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_request(&self, id: RequestId) -> Result<SoftwareRequest, DeviceDeskError> {
        self.requests.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Software request",
                id: id.to_string(),
            }
            .into()
        })
    }
}
