//! Flat-file store for guest service requests.
//!
//! The whole collection lives in a single JSON document. Every
//! operation reads the file wholesale, mutates the collection in
//! memory, and writes it back wholesale. There is no cross-process
//! locking; a second writer on the same file can lose updates.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::model::{NewRequest, RequestStatus, RequestUpdate, ServiceRequest};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request '{id}' not found")]
    RequestNotFound { id: String },
    #[error("failed to access request store: {0}")]
    Io(#[from] std::io::Error),
    #[error("request store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct RequestStore {
    path: PathBuf,
}

impl RequestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates a record with a fresh id and status `received`.
    pub fn create(&self, new: NewRequest) -> Result<ServiceRequest, StoreError> {
        let mut requests = self.read_all()?;
        let record = ServiceRequest {
            id: Uuid::now_v7().to_string(),
            guest_name: new.guest_name,
            room_number: new.room_number,
            request_details: new.request_details,
            priority: new.priority,
            status: RequestStatus::Received,
            created_at: Some(Utc::now().to_rfc3339()),
            updated_at: None,
        };

        debug!(id = %record.id, room = record.room_number, "creating request");
        requests.push(record.clone());
        self.write_all(&requests)?;
        Ok(record)
    }

    /// All records, sorted ascending by priority (lower number first).
    pub fn list(&self) -> Result<Vec<ServiceRequest>, StoreError> {
        let mut requests = self.read_all()?;
        requests.sort_by_key(|r| r.priority);
        Ok(requests)
    }

    pub fn get(&self, id: &str) -> Result<ServiceRequest, StoreError> {
        let requests = self.read_all()?;
        requests
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::RequestNotFound { id: id.to_string() })
    }

    /// Merges the supplied fields into an existing record.
    pub fn update(&self, id: &str, update: RequestUpdate) -> Result<ServiceRequest, StoreError> {
        self.modify(id, |record| {
            record.apply(update);
            record.updated_at = Some(Utc::now().to_rfc3339());
        })
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut requests = self.read_all()?;
        let before = requests.len();
        requests.retain(|r| r.id != id);
        if requests.len() == before {
            return Err(StoreError::RequestNotFound { id: id.to_string() });
        }

        debug!(id, "deleting request");
        self.write_all(&requests)
    }

    pub fn complete(&self, id: &str) -> Result<ServiceRequest, StoreError> {
        self.modify(id, |record| {
            record.status = RequestStatus::Completed;
            record.updated_at = Some(Utc::now().to_rfc3339());
        })
    }

    fn modify(
        &self,
        id: &str,
        mutate: impl FnOnce(&mut ServiceRequest),
    ) -> Result<ServiceRequest, StoreError> {
        let mut requests = self.read_all()?;
        let record = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::RequestNotFound { id: id.to_string() })?;

        mutate(record);
        let updated = record.clone();
        self.write_all(&requests)?;
        Ok(updated)
    }

    // A missing file reads as an empty collection so a fresh store
    // needs no setup step.
    fn read_all(&self) -> Result<Vec<ServiceRequest>, StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(error.into()),
        }
    }

    fn write_all(&self, requests: &[ServiceRequest]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(requests)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
