//! The request collector: a small REST surface that validates and persists
//! booking and contact submissions. Mounted next to the Leptos routes and
//! shares the same injected state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use shared_types::{NewBooking, NewContactRequest};

use crate::booking::validate::{validate_contact, validate_new_booking, FieldError};
use crate::state::AppState;
use crate::storage::StorageError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/bookings", post(create_booking).get(list_bookings))
        .route("/api/bookings/email/:email", get(bookings_by_email))
        .route("/api/contact", post(create_contact_request).get(list_contact_requests))
        .with_state(state)
}

fn validation_failure(message: &str, errors: Vec<FieldError>) -> Response {
    let errors: Vec<_> = errors
        .into_iter()
        .map(|e| json!({ "field": e.field, "message": e.message }))
        .collect();
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": message, "errors": errors })),
    )
        .into_response()
}

fn store_failure(message: &str, error: StorageError) -> Response {
    tracing::error!(error = %error, "{message}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": message, "error": error.to_string() })),
    )
        .into_response()
}

async fn create_booking(
    State(state): State<AppState>,
    Json(new): Json<NewBooking>,
) -> Response {
    let errors = validate_new_booking(&new);
    if !errors.is_empty() {
        return validation_failure("Invalid booking data", errors);
    }

    match state.storage.create_booking(new).await {
        Ok(booking) => {
            tracing::info!(id = booking.id, date = %booking.date, time = %booking.time, "booking created");
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Booking created successfully",
                    "id": booking.id,
                    "booking": booking,
                })),
            )
                .into_response()
        }
        Err(e) => store_failure("Error creating booking", e),
    }
}

async fn list_bookings(State(state): State<AppState>) -> Response {
    match state.storage.bookings().await {
        Ok(bookings) => (StatusCode::OK, Json(bookings)).into_response(),
        Err(e) => store_failure("Error retrieving bookings", e),
    }
}

async fn bookings_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Response {
    match state.storage.bookings_by_email(&email).await {
        Ok(bookings) => (StatusCode::OK, Json(bookings)).into_response(),
        Err(e) => store_failure("Error retrieving bookings", e),
    }
}

async fn create_contact_request(
    State(state): State<AppState>,
    Json(new): Json<NewContactRequest>,
) -> Response {
    let errors = validate_contact(&new);
    if !errors.is_empty() {
        return validation_failure("Invalid contact request data", errors);
    }

    match state.storage.create_contact_request(new).await {
        Ok(request) => {
            tracing::info!(id = request.id, "contact request created");
            let notifier = state.notifier.clone();
            let notify_copy = request.clone();
            tokio::spawn(async move {
                notifier.contact_request_submitted(&notify_copy).await;
            });
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Contact request submitted successfully",
                    "id": request.id,
                })),
            )
                .into_response()
        }
        Err(e) => store_failure("Error creating contact request", e),
    }
}

async fn list_contact_requests(State(state): State<AppState>) -> Response {
    match state.storage.contact_requests().await {
        Ok(requests) => (StatusCode::OK, Json(requests)).into_response(),
        Err(e) => store_failure("Error retrieving contact requests", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::email::Notifier;
    use crate::storage::MemStorage;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = AppConfig {
            backend: crate::config::StorageBackend::Memory,
            database_url: String::new(),
            notify_webhook_url: None,
            business_email: "owner@example.com".into(),
        };
        let state = AppState::new(
            Arc::new(MemStorage::new()),
            Arc::new(Notifier::from_config(&config)),
        );
        router(state)
    }

    fn booking_json(email: &str) -> serde_json::Value {
        json!({
            "firstName": "Alex",
            "lastName": "Morgan",
            "email": email,
            "phone": "5551234567",
            "address": "12 Main Street",
            "city": "Springfield",
            "state": "IL",
            "zipCode": "62704",
            "serviceType": "extinguisher",
            "propertyType": "commercial",
            "date": "2025-03-10",
            "time": "09:00",
            "notes": null,
        })
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_booking_is_created() {
        let app = test_router();
        let response = app
            .oneshot(post_json("/api/bookings", &booking_json("a@b.com")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["booking"]["email"], "a@b.com");
        assert_eq!(body["booking"]["serviceType"], "extinguisher");
    }

    #[tokio::test]
    async fn invalid_booking_is_rejected_with_field_errors() {
        let app = test_router();
        let mut bad = booking_json("not-an-email");
        bad["firstName"] = json!("A");

        let response = app.oneshot(post_json("/api/bookings", &bad)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        let fields: Vec<_> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap().to_string())
            .collect();
        assert!(fields.contains(&"firstName".to_string()));
        assert!(fields.contains(&"email".to_string()));
    }

    #[tokio::test]
    async fn bookings_can_be_filtered_by_email() {
        let app = test_router();
        app.clone()
            .oneshot(post_json("/api/bookings", &booking_json("a@b.com")))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_json("/api/bookings", &booking_json("c@d.com")))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/bookings/email/a@b.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["email"], "a@b.com");
    }

    #[tokio::test]
    async fn contact_request_round_trip() {
        let app = test_router();
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/contact",
                &json!({
                    "firstName": "Alex",
                    "lastName": "Morgan",
                    "email": "alex@example.com",
                    "phone": null,
                    "serviceInterest": "risk",
                    "message": "Do you service restaurant kitchens?",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(Request::builder().uri("/api/contact").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn short_contact_message_is_rejected() {
        let app = test_router();
        let response = app
            .oneshot(post_json(
                "/api/contact",
                &json!({
                    "firstName": "Alex",
                    "lastName": "Morgan",
                    "email": "alex@example.com",
                    "phone": null,
                    "serviceInterest": null,
                    "message": "hi",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
