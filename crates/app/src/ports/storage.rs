//! Storage port — repository traits for device inventory and requests.

use std::future::Future;

use devicedesk_domain::device::Device;
use devicedesk_domain::device_status::DeviceStatus;
use devicedesk_domain::error::DeviceDeskError;
use devicedesk_domain::id::{DeviceId, RequestId, UserId};
use devicedesk_domain::software_request::SoftwareRequest;

/// Read-only access to the device inventory.
pub trait DeviceRepository {
    /// Devices registered to `user_id`, or `None` when the user is unknown.
    ///
    /// A known user with no devices yields `Some(vec![])`.
    fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Vec<Device>>, DeviceDeskError>> + Send;

    /// Compliance status of `device_id`, or `None` when the device is unknown.
    fn get_status(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Option<DeviceStatus>, DeviceDeskError>> + Send;
}

/// Storage for [`SoftwareRequest`]s.
pub trait SoftwareRequestRepository {
    /// Store a new request under the next free id.
    ///
    /// Implementations must allocate the id and insert the request atomically
    /// so that ids stay unique and increasing under concurrent callers.
    fn create(
        &self,
        request: SoftwareRequest,
    ) -> impl Future<Output = Result<(RequestId, SoftwareRequest), DeviceDeskError>> + Send;

    /// Get a request by its identifier.
    fn get_by_id(
        &self,
        id: RequestId,
    ) -> impl Future<Output = Result<Option<SoftwareRequest>, DeviceDeskError>> + Send;
}
