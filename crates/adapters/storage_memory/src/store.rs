//! In-memory implementation of the storage ports.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use devicedesk_app::ports::{DeviceRepository, SoftwareRequestRepository};
use devicedesk_domain::device::Device;
use devicedesk_domain::device_status::DeviceStatus;
use devicedesk_domain::error::DeviceDeskError;
use devicedesk_domain::id::{DeviceId, RequestId, UserId};
use devicedesk_domain::software_request::SoftwareRequest;

use crate::error::StorageError;
use crate::seed::SeedData;

/// Software requests plus the id counter that keys them.
#[derive(Debug, Default)]
struct RequestLedger {
    last_id: Option<RequestId>,
    entries: HashMap<RequestId, SoftwareRequest>,
}

impl RequestLedger {
    fn insert(&mut self, request: SoftwareRequest) -> RequestId {
        let id = self.last_id.map_or(RequestId::FIRST, RequestId::next);
        self.last_id = Some(id);
        self.entries.insert(id, request);
        id
    }
}

#[derive(Debug)]
struct Inner {
    users: HashMap<UserId, Vec<Device>>,
    statuses: HashMap<DeviceId, DeviceStatus>,
    requests: Mutex<RequestLedger>,
}

/// Device inventory and request ledger held in process memory.
///
/// Cloning is cheap and every clone shares the same data, so one store can
/// back several services.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    inner: Arc<Inner>,
}

impl InMemoryStore {
    /// Build a store from seed data with an empty request ledger.
    #[must_use]
    pub fn new(seed: SeedData) -> Self {
        Self {
            inner: Arc::new(Inner {
                users: seed.users.into_iter().collect(),
                statuses: seed.statuses.into_iter().collect(),
                requests: Mutex::new(RequestLedger::default()),
            }),
        }
    }

    fn insert_request(
        &self,
        request: SoftwareRequest,
    ) -> Result<(RequestId, SoftwareRequest), StorageError> {
        let mut ledger = self
            .inner
            .requests
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?;
        let id = ledger.insert(request.clone());
        Ok((id, request))
    }

    fn find_request(&self, id: RequestId) -> Result<Option<SoftwareRequest>, StorageError> {
        let ledger = self
            .inner
            .requests
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(ledger.entries.get(&id).cloned())
    }
}

impl DeviceRepository for InMemoryStore {
    fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Vec<Device>>, DeviceDeskError>> + Send {
        let result = self.inner.users.get(user_id).cloned();
        async move { Ok(result) }
    }

    fn get_status(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Option<DeviceStatus>, DeviceDeskError>> + Send {
        let result = self.inner.statuses.get(device_id).cloned();
        async move { Ok(result) }
    }
}

impl SoftwareRequestRepository for InMemoryStore {
    fn create(
        &self,
        request: SoftwareRequest,
    ) -> impl Future<Output = Result<(RequestId, SoftwareRequest), DeviceDeskError>> + Send {
        let result = self.insert_request(request).map_err(DeviceDeskError::from);
        async move { result }
    }

    fn get_by_id(
        &self,
        id: RequestId,
    ) -> impl Future<Output = Result<Option<SoftwareRequest>, DeviceDeskError>> + Send {
        let result = self.find_request(id).map_err(DeviceDeskError::from);
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn store() -> InMemoryStore {
        InMemoryStore::new(SeedData::builtin().unwrap())
    }

    fn request(name: &str) -> SoftwareRequest {
        SoftwareRequest::pending(DeviceId::new("laptop001"), Some(name.to_string()), None)
            .unwrap()
    }

    #[tokio::test]
    async fn should_find_seeded_devices_by_user() {
        let devices = store()
            .find_by_user(&UserId::new("user456"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].model, "MacBook Pro 16");
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_user() {
        let devices = store()
            .find_by_user(&UserId::new("unknownuser999"))
            .await
            .unwrap();
        assert!(devices.is_none());
    }

    #[tokio::test]
    async fn should_return_status_for_seeded_device() {
        let status = store()
            .get_status(&DeviceId::new("laptop003"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(status.os_version, "macOS Sonoma 14.5");
    }

    #[tokio::test]
    async fn should_allocate_sequential_ids_starting_at_one() {
        let store = store();
        let (first, _) = store.create(request("A")).await.unwrap();
        let (second, _) = store.create(request("B")).await.unwrap();

        assert_eq!(first.to_string(), "req_1");
        assert_eq!(second.to_string(), "req_2");
    }

    #[tokio::test]
    async fn should_share_ledger_between_clones() {
        let store = store();
        let clone = store.clone();

        let (id, _) = store.create(request("TestApp")).await.unwrap();
        let fetched = clone.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.software_name, "TestApp");
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_request() {
        let fetched = store()
            .get_by_id(RequestId::from_sequence(1))
            .await
            .unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_keep_ids_unique_under_concurrent_writers() {
        let store = store();
        let mut handles = Vec::new();
        for n in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(request(&format!("app-{n}"))).await.unwrap().0
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(ids.iter().max().copied(), Some(RequestId::from_sequence(64)));
    }
}
