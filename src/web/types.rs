// src/web/types.rs
use rocket::form::FromForm;
use rocket::serde::{Deserialize, Serialize};

use crate::core::loader::DataSource;
use crate::page::PageRenderer;

/// Renderer shared by every request
pub type SiteRenderer = PageRenderer<DataSource>;

pub const THEME_COOKIE: &str = "theme";
pub const ACTIVE_TAB_COOKIE: &str = "activeTab";
pub const CONTACT_TAB: &str = "contact";
pub const CONTACT_SOURCE: &str = "CV Portfolio Website";

#[derive(FromForm)]
pub struct ThemeForm {
    pub lang: Option<String>,
    pub tab: Option<String>,
}

#[derive(FromForm)]
pub struct ContactForm {
    #[field(name = "form-name")]
    pub name: String,
    #[field(name = "form-email")]
    pub email: String,
    #[field(name = "form-message")]
    pub message: String,
    pub lang: Option<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What a contact submission would send; it is only logged
#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
    pub source: String,
}

impl ContactPayload {
    /// Trimmed payload, or `None` when a required field is blank
    pub fn new(name: &str, email: &str, message: &str) -> Option<Self> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: CONTACT_SOURCE.to_string(),
        })
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Action,
    Error,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl ActionResponse {
    pub fn success(message: String, action: String) -> Self {
        Self {
            response_type: ResponseType::Action,
            success: true,
            message,
            action,
            receipt_id: None,
        }
    }

    pub fn with_receipt(mut self, receipt_id: String) -> Self {
        self.receipt_id = Some(receipt_id);
        self
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}
