use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{Booking, ContactRequest, NewBooking, NewContactRequest};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{Storage, StorageError};

/// Postgres-backed collector store.
pub struct DbStorage {
    pool: PgPool,
}

impl DbStorage {
    pub fn new(pool: PgPool) -> Self {
        DbStorage { pool }
    }

    /// Connect and bring the schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(sqlx::Error::from)?;

        Ok(DbStorage { pool })
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    address: String,
    city: String,
    state: String,
    zip_code: String,
    service_type: String,
    property_type: String,
    date: String,
    time: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            address: row.address,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            service_type: row.service_type,
            property_type: row.property_type,
            date: row.date,
            time: row.time,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ContactRequestRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    service_interest: Option<String>,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<ContactRequestRow> for ContactRequest {
    fn from(row: ContactRequestRow) -> Self {
        ContactRequest {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            service_interest: row.service_interest,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

const SELECT_BOOKING: &str = "
    SELECT id, first_name, last_name, email, phone, address, city, state,
           zip_code, service_type, property_type, date, time, notes, created_at
    FROM bookings
";

#[async_trait]
impl Storage for DbStorage {
    async fn create_booking(&self, new: NewBooking) -> Result<Booking, StorageError> {
        let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            "INSERT INTO bookings
                (first_name, last_name, email, phone, address, city, state,
                 zip_code, service_type, property_type, date, time, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING id, created_at",
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.address)
        .bind(&new.city)
        .bind(&new.state)
        .bind(&new.zip_code)
        .bind(&new.service_type)
        .bind(&new.property_type)
        .bind(&new.date)
        .bind(&new.time)
        .bind(&new.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(Booking::from_new(new, id, created_at))
    }

    async fn bookings(&self) -> Result<Vec<Booking>, StorageError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            &format!("{SELECT_BOOKING} ORDER BY created_at DESC"),
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn bookings_by_email(&self, email: &str) -> Result<Vec<Booking>, StorageError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            &format!("{SELECT_BOOKING} WHERE email = $1 ORDER BY created_at DESC"),
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn create_contact_request(
        &self,
        new: NewContactRequest,
    ) -> Result<ContactRequest, StorageError> {
        let (id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            "INSERT INTO contact_requests
                (first_name, last_name, email, phone, service_interest, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, created_at",
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.service_interest)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(ContactRequest::from_new(new, id, created_at))
    }

    async fn contact_requests(&self) -> Result<Vec<ContactRequest>, StorageError> {
        let rows = sqlx::query_as::<_, ContactRequestRow>(
            "SELECT id, first_name, last_name, email, phone, service_interest,
                    message, created_at
             FROM contact_requests
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ContactRequest::from).collect())
    }
}
