//! Persistence for the request collector. `Storage` is a capability
//! interface with two backends, selected by configuration at startup:
//! the sqlx/Postgres store for real deployments and an in-memory store
//! for development and tests.

pub mod db;
pub mod mem;

use async_trait::async_trait;
use shared_types::{Booking, ContactRequest, NewBooking, NewContactRequest};
use thiserror::Error;

pub use db::DbStorage;
pub use mem::MemStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Each create is an independent, unordered insert; the collector performs
/// no conflicting-slot detection.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_booking(&self, new: NewBooking) -> Result<Booking, StorageError>;
    async fn bookings(&self) -> Result<Vec<Booking>, StorageError>;
    async fn bookings_by_email(&self, email: &str) -> Result<Vec<Booking>, StorageError>;

    async fn create_contact_request(
        &self,
        new: NewContactRequest,
    ) -> Result<ContactRequest, StorageError>;
    async fn contact_requests(&self) -> Result<Vec<ContactRequest>, StorageError>;
}
