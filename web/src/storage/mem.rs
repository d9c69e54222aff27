use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use shared_types::{Booking, ContactRequest, NewBooking, NewContactRequest};

use super::{Storage, StorageError};

#[derive(Default)]
struct Inner {
    bookings: BTreeMap<i64, Booking>,
    contact_requests: BTreeMap<i64, ContactRequest>,
    next_booking_id: i64,
    next_contact_id: i64,
}

/// In-memory backend for development and tests. Ids are assigned
/// sequentially starting at 1, like the database's serial columns.
#[derive(Default)]
pub struct MemStorage {
    inner: Mutex<Inner>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_booking(&self, new: NewBooking) -> Result<Booking, StorageError> {
        let mut inner = self.inner.lock().expect("storage mutex poisoned");
        inner.next_booking_id += 1;
        let id = inner.next_booking_id;
        let booking = Booking::from_new(new, id, Utc::now());
        inner.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn bookings(&self) -> Result<Vec<Booking>, StorageError> {
        let inner = self.inner.lock().expect("storage mutex poisoned");
        Ok(inner.bookings.values().cloned().collect())
    }

    async fn bookings_by_email(&self, email: &str) -> Result<Vec<Booking>, StorageError> {
        let inner = self.inner.lock().expect("storage mutex poisoned");
        Ok(inner
            .bookings
            .values()
            .filter(|b| b.email == email)
            .cloned()
            .collect())
    }

    async fn create_contact_request(
        &self,
        new: NewContactRequest,
    ) -> Result<ContactRequest, StorageError> {
        let mut inner = self.inner.lock().expect("storage mutex poisoned");
        inner.next_contact_id += 1;
        let id = inner.next_contact_id;
        let request = ContactRequest::from_new(new, id, Utc::now());
        inner.contact_requests.insert(id, request.clone());
        Ok(request)
    }

    async fn contact_requests(&self) -> Result<Vec<ContactRequest>, StorageError> {
        let inner = self.inner.lock().expect("storage mutex poisoned");
        Ok(inner.contact_requests.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking(email: &str) -> NewBooking {
        NewBooking {
            first_name: "Alex".into(),
            last_name: "Morgan".into(),
            email: email.into(),
            phone: "5551234567".into(),
            address: "12 Main Street".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62704".into(),
            service_type: "extinguisher".into(),
            property_type: "commercial".into(),
            date: "2025-03-10".into(),
            time: "09:00".into(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential() {
        let store = MemStorage::new();
        let first = store.create_booking(sample_booking("a@b.com")).await.unwrap();
        let second = store.create_booking(sample_booking("c@d.com")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.bookings().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn filters_by_exact_email() {
        let store = MemStorage::new();
        store.create_booking(sample_booking("a@b.com")).await.unwrap();
        store.create_booking(sample_booking("c@d.com")).await.unwrap();
        store.create_booking(sample_booking("a@b.com")).await.unwrap();

        let matches = store.bookings_by_email("a@b.com").await.unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|b| b.email == "a@b.com"));
        assert!(store.bookings_by_email("A@B.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn contact_requests_round_trip() {
        let store = MemStorage::new();
        let created = store
            .create_contact_request(NewContactRequest {
                first_name: "Alex".into(),
                last_name: "Morgan".into(),
                email: "alex@example.com".into(),
                phone: None,
                service_interest: Some("risk".into()),
                message: "Do you service restaurant kitchens?".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let all = store.contact_requests().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].service_interest.as_deref(), Some("risk"));
    }
}
