// src/web/handlers/contact_handlers.rs
use crate::utils::normalize_language;
use crate::web::handlers::page_handlers::page_location;
use crate::web::types::*;

use rocket::response::Redirect;
use rocket::serde::json::Json;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Contact form post. The payload is logged, never transmitted.
pub fn submit_contact_handler(form: ContactForm) -> Redirect {
    let lang = normalize_language(form.lang.as_deref());

    match ContactPayload::new(&form.name, &form.email, &form.message) {
        Some(payload) => {
            log_payload(&payload);
            Redirect::to(page_location(lang, Some(CONTACT_TAB), true))
        }
        None => {
            warn!("Contact form submitted with missing fields");
            Redirect::to(page_location(lang, Some(CONTACT_TAB), false))
        }
    }
}

pub fn api_contact_handler(
    request: ContactRequest,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    let Some(payload) = ContactPayload::new(&request.name, &request.email, &request.message) else {
        return Err(Json(StandardErrorResponse::new(
            "Name, email and message are required".to_string(),
            "VALIDATION_ERROR".to_string(),
            vec![
                "Fill in every field of the contact form".to_string(),
                "Check that the email address is not empty".to_string(),
            ],
        )));
    };

    log_payload(&payload);
    let receipt_id = Uuid::new_v4().to_string();
    info!("Contact message accepted, receipt {}", receipt_id);

    Ok(Json(
        ActionResponse::success("Message Sent!".to_string(), "contact_received".to_string())
            .with_receipt(receipt_id),
    ))
}

fn log_payload(payload: &ContactPayload) {
    match serde_json::to_string(payload) {
        Ok(json) => debug!("Form submitted: {}", json),
        Err(e) => warn!("Failed to serialize contact payload: {}", e),
    }
}
