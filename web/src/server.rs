use leptos::prelude::*;
use leptos::server;
use shared_types::{Booking, NewBooking, NewContactRequest};

use crate::booking::validate::{validate_contact, validate_new_booking, FieldError};

fn first_message(errors: &[FieldError]) -> String {
    errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_else(|| "Invalid submission".to_string())
}

/// Persist a booking through the collector. The wizard has already
/// validated the draft; the same table runs again here so a bad payload
/// can never reach the store.
#[server]
pub async fn submit_booking(new: NewBooking) -> Result<Booking, ServerFnError> {
    use crate::state::AppState;

    let errors = validate_new_booking(&new);
    if !errors.is_empty() {
        return Err(ServerFnError::new(first_message(&errors)));
    }

    let state = expect_context::<AppState>();
    match state.storage.create_booking(new).await {
        Ok(booking) => {
            tracing::info!(id = booking.id, date = %booking.date, time = %booking.time, "booking created");
            Ok(booking)
        }
        Err(e) => Err(ServerFnError::new(format!("Failed to save booking: {}", e))),
    }
}

/// Persist a contact request and notify the business, best-effort.
#[server]
pub async fn submit_contact_request(new: NewContactRequest) -> Result<i64, ServerFnError> {
    use crate::state::AppState;

    let errors = validate_contact(&new);
    if !errors.is_empty() {
        return Err(ServerFnError::new(first_message(&errors)));
    }

    let state = expect_context::<AppState>();
    match state.storage.create_contact_request(new).await {
        Ok(request) => {
            let id = request.id;
            tracing::info!(id, "contact request created");
            let notifier = state.notifier.clone();
            tokio::spawn(async move {
                notifier.contact_request_submitted(&request).await;
            });
            Ok(id)
        }
        Err(e) => Err(ServerFnError::new(format!(
            "Failed to save contact request: {}",
            e
        ))),
    }
}
