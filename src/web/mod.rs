// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::config::AppConfig;
use crate::core::loader::DocumentSource;
use crate::core::template_engine::TemplateEngine;
use crate::page::PageRenderer;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::fs::{FileServer, Options};
use rocket::http::{CookieJar, Header, Status};
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::path::Path;
use tracing::{error, info};

const API_BASE: &str = "/api";

/// CORS headers for the JSON API; page routes are same-origin only
pub struct ApiCors;

#[rocket::async_trait]
impl Fairing for ApiCors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to API responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        if !request.uri().path().as_str().starts_with(API_BASE) {
            return;
        }
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
    }
}

// Page routes

#[get("/?<lang>&<tab>&<sent>")]
pub async fn index(
    lang: Option<&str>,
    tab: Option<&str>,
    sent: Option<bool>,
    cookies: &CookieJar<'_>,
    renderer: &State<SiteRenderer>,
) -> RawHtml<String> {
    handlers::index_handler(renderer, lang, tab, sent.unwrap_or(false), cookies).await
}

#[get("/tab/<id>?<lang>")]
pub fn select_tab(
    id: &str,
    lang: Option<&str>,
    cookies: &CookieJar<'_>,
    renderer: &State<SiteRenderer>,
) -> Redirect {
    handlers::select_tab_handler(renderer.tabs(), id, lang, cookies)
}

#[post("/theme", data = "<form>")]
pub fn toggle_theme(form: Form<ThemeForm>, cookies: &CookieJar<'_>) -> Redirect {
    handlers::toggle_theme_handler(form.into_inner(), cookies)
}

#[post("/contact", data = "<form>")]
pub fn submit_contact(form: Form<ContactForm>) -> Redirect {
    handlers::submit_contact_handler(form.into_inner())
}

// API routes

#[post("/contact", data = "<request>")]
pub fn api_contact(
    request: Json<ContactRequest>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::api_contact_handler(request.into_inner())
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Available endpoints: /api/health, /api/contact".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Assemble the server around an already built renderer
pub fn build_rocket(renderer: SiteRenderer, static_dir: &Path, port: u16) -> Rocket<Build> {
    let figment = rocket::Config::figment().merge(("port", port));

    rocket::custom(figment)
        .attach(ApiCors)
        .manage(renderer)
        .register(API_BASE, catchers![bad_request, not_found, internal_error])
        .mount("/", routes![index, select_tab, toggle_theme, submit_contact])
        .mount(API_BASE, routes![api_contact, health, options])
        .mount("/", FileServer::new(static_dir, Options::Index | Options::Missing))
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let templates = TemplateEngine::load(&config.templates_path)?;
    let source = config.data_source()?;

    info!("Starting CV portfolio server");
    info!("Data source: {}", source.describe());
    info!(
        "Templates: {}",
        templates
            .source()
            .map_or_else(|| "built-in".to_string(), |dir| dir.display().to_string())
    );
    info!("Static files: {}", config.static_files.dir.display());
    info!("Server: http://localhost:{}", config.port);

    let renderer = PageRenderer::new(source, templates)?;

    if let Err(e) = build_rocket(renderer, &config.static_files.dir, config.port)
        .launch()
        .await
    {
        error!("Server error: {}", e);
        anyhow::bail!("Server failed: {}", e);
    }

    Ok(())
}
