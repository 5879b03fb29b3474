//! In-memory `RequestStore` backend.
//!
//! Process-lifetime storage for tests, prototyping, and the CLI demo. All
//! records are lost on restart.

use std::collections::HashMap;
use std::sync::Mutex;

use super::domain::{Decision, RequestId, TransferRequest};
use super::store::{listing_order, seed_requests, RequestStore, StoreError};

#[derive(Default)]
pub struct InMemoryRequestStore {
    records: Mutex<HashMap<RequestId, TransferRequest>>,
}

impl InMemoryRequestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestStore for InMemoryRequestStore {
    fn initialize(&self) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("request store mutex poisoned");
        if records.is_empty() {
            for request in seed_requests() {
                records.insert(request.id.clone(), request);
            }
        }
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<TransferRequest>, StoreError> {
        let records = self.records.lock().expect("request store mutex poisoned");
        let mut listing: Vec<TransferRequest> = records.values().cloned().collect();
        listing.sort_by(listing_order);
        Ok(listing)
    }

    fn create(&self, request: TransferRequest) -> Result<TransferRequest, StoreError> {
        let mut records = self.records.lock().expect("request store mutex poisoned");
        if records.contains_key(&request.id) {
            return Err(StoreError::DuplicateId(request.id));
        }
        records.insert(request.id.clone(), request.clone());
        Ok(request)
    }

    fn update_status(&self, id: &RequestId, decision: Decision) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("request store mutex poisoned");
        match records.get_mut(id) {
            Some(record) => {
                record.status = decision.as_status();
                Ok(())
            }
            None => Err(StoreError::NotFound(id.clone())),
        }
    }
}
