use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking payload as the client submits it. The terms checkbox is a
/// client-side gate only and is stripped before this struct is built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub service_type: String,
    pub property_type: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
}

/// A persisted booking as the collector returns it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub service_type: String,
    pub property_type: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interest: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_new(new: NewBooking, id: i64, created_at: DateTime<Utc>) -> Self {
        Booking {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            city: new.city,
            state: new.state,
            zip_code: new.zip_code,
            service_type: new.service_type,
            property_type: new.property_type,
            date: new.date,
            time: new.time,
            notes: new.notes,
            created_at,
        }
    }
}

impl ContactRequest {
    pub fn from_new(new: NewContactRequest, id: i64, created_at: DateTime<Utc>) -> Self {
        ContactRequest {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            service_interest: new.service_interest,
            message: new.message,
            created_at,
        }
    }
}
