//! Shared application state for axum handlers.

use std::sync::Arc;

use devicedesk_app::ports::{DeviceRepository, SoftwareRequestRepository};
use devicedesk_app::services::device_service::DeviceService;
use devicedesk_app::services::software_request_service::SoftwareRequestService;

use crate::landing::LandingPage;

/// Application state shared across all axum handlers.
///
/// Generic over the device repository and the software request repository to
/// avoid dynamic dispatch. `Clone` is implemented manually so the underlying
/// types themselves do not need to be `Clone`; only the `Arc` wrappers are
/// cloned.
pub struct AppState<DR, SR> {
    /// User device and status lookups.
    pub device_service: Arc<DeviceService<DR>>,
    /// Software request submission and lookup.
    pub software_request_service: Arc<SoftwareRequestService<DR, SR>>,
    /// Content of the `/` landing page.
    pub landing: Arc<LandingPage>,
}

impl<DR, SR> Clone for AppState<DR, SR> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            software_request_service: Arc::clone(&self.software_request_service),
            landing: Arc::clone(&self.landing),
        }
    }
}

impl<DR, SR> AppState<DR, SR>
where
    DR: DeviceRepository + Send + Sync + 'static,
    SR: SoftwareRequestRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        device_service: DeviceService<DR>,
        software_request_service: SoftwareRequestService<DR, SR>,
        landing: LandingPage,
    ) -> Self {
        Self {
            device_service: Arc::new(device_service),
            software_request_service: Arc::new(software_request_service),
            landing: Arc::new(landing),
        }
    }
}
