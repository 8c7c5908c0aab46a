// src/web/handlers/page_handlers.rs
use crate::core::tabs::{TabEvent, TabManager, TabSet};
use crate::page::PageRequest;
use crate::types::{AppState, Lang, Theme};
use crate::utils::normalize_language;
use crate::web::types::*;

use rocket::http::{Cookie, CookieJar, RawStr, SameSite};
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use tracing::info;

/// Page URL for a language, an optional tab and the contact "sent" flag.
/// The tab doubles as the fragment so the browser scrolls to the panel.
pub fn page_location(lang: Lang, tab: Option<&str>, sent: bool) -> String {
    let tab = tab.map(|tab| RawStr::new(tab).percent_encode().to_string());

    let mut location = format!("/?lang={}", lang);
    if let Some(tab) = &tab {
        location.push_str(&format!("&tab={}", tab));
    }
    if sent {
        location.push_str("&sent=true");
    }
    if let Some(tab) = &tab {
        location.push_str(&format!("#{}", tab));
    }
    location
}

pub(crate) fn preference_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .build()
}

/// Full load cycle for one page view
pub async fn index_handler(
    renderer: &SiteRenderer,
    lang: Option<&str>,
    tab: Option<&str>,
    sent: bool,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    let lang = normalize_language(lang);
    let theme = Theme::from_preference(cookies.get(THEME_COOKIE).map(|c| c.value()));
    let state = AppState::today(lang, theme);

    let request = PageRequest {
        fragment: tab.map(str::to_string),
        persisted_tab: cookies
            .get(ACTIVE_TAB_COOKIE)
            .map(|c| c.value().to_string()),
        contact_sent: sent,
    };

    let page = renderer.render(&state, &request).await;
    if let Some(tab) = page.tab_effects.persist {
        cookies.add(preference_cookie(ACTIVE_TAB_COOKIE, tab));
    }

    RawHtml(page.html)
}

/// A tab click: remember the tab and move the fragment to it
pub fn select_tab_handler(
    tabs: &TabSet,
    id: &str,
    lang: Option<&str>,
    cookies: &CookieJar<'_>,
) -> Redirect {
    let lang = normalize_language(lang);
    let persisted = cookies
        .get(ACTIVE_TAB_COOKIE)
        .map(|c| c.value().to_string());

    let (mut manager, _) = TabManager::initialize(tabs, None, persisted.as_deref());
    let effects = manager.handle(TabEvent::Click(id.to_string()));

    if let Some(tab) = effects.persist {
        info!("Tab selected: {}", tab);
        cookies.add(preference_cookie(ACTIVE_TAB_COOKIE, tab));
    }

    Redirect::to(page_location(lang, effects.fragment.as_deref(), false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_page_locations() {
        assert_eq!(page_location(Lang::En, None, false), "/?lang=en");
        assert_eq!(
            page_location(Lang::Ar, Some("skills"), false),
            "/?lang=ar&tab=skills#skills"
        );
        assert_eq!(
            page_location(Lang::En, Some("contact"), true),
            "/?lang=en&tab=contact&sent=true#contact"
        );
    }

    #[test]
    fn encodes_tab_ids() {
        let location = page_location(Lang::En, Some("my tab"), false);
        assert!(!location.contains(' '));
        assert!(location.ends_with("#my%20tab"));
    }
}
