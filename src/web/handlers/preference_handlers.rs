// src/web/handlers/preference_handlers.rs
use crate::types::{AppState, Theme};
use crate::utils::normalize_language;
use crate::web::handlers::page_handlers::{page_location, preference_cookie};
use crate::web::types::*;

use rocket::http::CookieJar;
use rocket::response::Redirect;
use tracing::info;

/// Flip the stored theme and go back to the page that asked
pub fn toggle_theme_handler(form: ThemeForm, cookies: &CookieJar<'_>) -> Redirect {
    let lang = normalize_language(form.lang.as_deref());
    let current = Theme::from_preference(cookies.get(THEME_COOKIE).map(|c| c.value()));
    let state = AppState::today(lang, current).with_theme_toggled();
    cookies.add(preference_cookie(THEME_COOKIE, state.theme.as_str().to_string()));
    info!("Theme switched from {} to {}", current, state.theme);

    let tab = form
        .tab
        .as_deref()
        .map(str::trim)
        .filter(|tab| !tab.is_empty());
    Redirect::to(page_location(lang, tab, false))
}
