use serde_json::json;
use shared_types::ContactRequest;

use crate::config::AppConfig;

/// Sends the business a notification when a contact request arrives.
/// Constructed once at startup and injected; without a configured relay
/// endpoint the service is disabled and only logs.
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
    business_email: String,
}

impl Notifier {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.notify_webhook_url.is_none() {
            tracing::info!("NOTIFY_WEBHOOK_URL not set, contact notifications disabled");
        }
        Notifier {
            client: reqwest::Client::new(),
            webhook_url: config.notify_webhook_url.clone(),
            business_email: config.business_email.clone(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Best-effort delivery: failures are logged and never surfaced to the
    /// request that triggered the notification.
    pub async fn contact_request_submitted(&self, request: &ContactRequest) {
        let Some(url) = &self.webhook_url else {
            return;
        };

        let payload = json!({
            "to": self.business_email,
            "subject": format!(
                "New Contact Form Submission from {} {}",
                request.first_name, request.last_name
            ),
            "html": format_contact_request(request),
        });

        match self.client.post(url).json(&payload).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(id = request.id, "contact request notification sent");
            }
            Ok(response) => {
                tracing::error!(
                    id = request.id,
                    status = %response.status(),
                    "notification relay rejected the message"
                );
            }
            Err(e) => {
                tracing::error!(id = request.id, error = %e, "failed to send notification");
            }
        }
    }
}

/// Render a contact request as the HTML notification body.
fn format_contact_request(request: &ContactRequest) -> String {
    format!(
        "<h2>New Contact Request from ABC Fire Security Website</h2>\
         <p><strong>Date:</strong> {}</p>\
         <hr />\
         <h3>Contact Information:</h3>\
         <p><strong>Name:</strong> {} {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Phone:</strong> {}</p>\
         <hr />\
         <h3>Request Details:</h3>\
         <p><strong>Service Interest:</strong> {}</p>\
         <h3>Message:</h3>\
         <p>{}</p>\
         <hr />\
         <p>This is an automated email from your website contact form.</p>",
        request.created_at.format("%B %-d, %Y %H:%M UTC"),
        request.first_name,
        request.last_name,
        request.email,
        request.phone.as_deref().unwrap_or("Not provided"),
        request.service_interest.as_deref().unwrap_or("Not specified"),
        request.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn formats_all_contact_fields() {
        let request = ContactRequest {
            id: 7,
            first_name: "Alex".into(),
            last_name: "Morgan".into(),
            email: "alex@example.com".into(),
            phone: Some("5551234567".into()),
            service_interest: Some("Fire Risk Assessment".into()),
            message: "Do you service restaurant kitchens?".into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap(),
        };

        let html = format_contact_request(&request);
        assert!(html.contains("Alex Morgan"));
        assert!(html.contains("alex@example.com"));
        assert!(html.contains("5551234567"));
        assert!(html.contains("Fire Risk Assessment"));
        assert!(html.contains("Do you service restaurant kitchens?"));
        assert!(html.contains("March 10, 2025"));
    }

    #[test]
    fn optional_fields_get_placeholders() {
        let request = ContactRequest {
            id: 8,
            first_name: "Alex".into(),
            last_name: "Morgan".into(),
            email: "alex@example.com".into(),
            phone: None,
            service_interest: None,
            message: "Quick question about inspections.".into(),
            created_at: Utc::now(),
        };

        let html = format_contact_request(&request);
        assert!(html.contains("Not provided"));
        assert!(html.contains("Not specified"));
    }
}
