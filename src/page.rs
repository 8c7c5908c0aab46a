// src/page.rs
//! One load cycle: fetch every document, run the section renderers and fill
//! the page shell. A failed load replaces the main region with an error panel.

use anyhow::Result;
use chrono::Datelike;
use tracing::{error, info};

use crate::core::loader::{CvLoader, DocumentSource};
use crate::core::tabs::{TabEffects, TabEvent, TabManager, TabSet};
use crate::core::template_engine::{apply, Binding, TemplateEngine};
use crate::sections;
use crate::types::{AppState, CvDocument};
use crate::utils::html_escape;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load CV data. Please try again later.";
const DEFAULT_TITLE: &str = "CV Portfolio";
/// How long the "Message Sent!" label covers the submit button
pub const CONTACT_SENT_MS: u32 = 3000;
const CONTACT_SUBMIT_LABEL: &str = r#"<i class="fas fa-paper-plane btn-icon"></i> Send Message"#;

/// Navigation context of a page request
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// Fragment (or its server-side stand-in) naming the requested tab
    pub fragment: Option<String>,
    /// Last active tab from preference storage
    pub persisted_tab: Option<String>,
    /// Show the contact form in its "sent" state
    pub contact_sent: bool,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub active_tab: Option<String>,
    pub tab_effects: TabEffects,
    /// False when the error panel replaced the main region
    pub loaded: bool,
}

pub struct PageRenderer<S> {
    loader: CvLoader<S>,
    templates: TemplateEngine,
    tabs: TabSet,
}

impl<S: DocumentSource> PageRenderer<S> {
    /// Build a renderer; tabs are discovered once from the shell
    pub fn new(source: S, templates: TemplateEngine) -> Result<Self> {
        let tabs = TabSet::discover(&templates.shell())?;
        info!("Discovered {} tabs: {:?}", tabs.tabs().len(), tabs.tabs());

        Ok(Self {
            loader: CvLoader::new(source),
            templates,
            tabs,
        })
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn loader(&self) -> &CvLoader<S> {
        &self.loader
    }

    pub async fn render(&self, state: &AppState, request: &PageRequest) -> RenderedPage {
        let (mut tabs, mut tab_effects) =
            TabManager::initialize(&self.tabs, None, request.persisted_tab.as_deref());
        if let Some(fragment) = &request.fragment {
            let effects = tabs.handle(TabEvent::HashChange(fragment.clone()));
            if effects.persist.is_some() {
                tab_effects = effects;
            }
        }
        let active_tab = tabs.active().map(str::to_string);
        let lang = state.lang;
        let tab_bindings = tabs.bindings(|id| format!("/tab/{}?lang={}", id, lang));

        let (main, document) = match self.loader.load_all().await {
            Ok(document) => {
                let mut bindings = sections::render_all(&document, state);
                bindings.extend(tab_bindings.iter().cloned());
                bindings.extend(contact_bindings(state, request.contact_sent));
                (apply(&self.templates.main, &bindings), Some(document))
            }
            Err(e) => {
                error!("Error loading data: {:#}", e);
                (error_panel(LOAD_ERROR_MESSAGE), None)
            }
        };

        let mut bindings = layout_bindings(state, active_tab.as_deref(), document.as_ref());
        bindings.extend(tab_bindings);
        bindings.push(Binding::html("main-content", main));

        RenderedPage {
            html: apply(&self.templates.layout, &bindings),
            active_tab,
            tab_effects,
            loaded: document.is_some(),
        }
    }
}

fn layout_bindings(
    state: &AppState,
    active_tab: Option<&str>,
    document: Option<&CvDocument>,
) -> Vec<Binding> {
    let lang = state.lang;
    let other = state.with_language_toggled().lang;
    let toggle_href = match active_tab {
        Some(tab) => format!("/?lang={}&tab={}#{}", other, tab, tab),
        None => format!("/?lang={}", other),
    };

    let name = document
        .and_then(|doc| doc.personal.personal.as_ref())
        .and_then(|personal| personal.full_name.as_ref())
        .map(|name| name.resolve(lang))
        .filter(|name| !name.is_empty());
    let title = match &name {
        Some(name) => format!("{} | {}", name, DEFAULT_TITLE),
        None => DEFAULT_TITLE.to_string(),
    };

    vec![
        Binding::attr("html", "lang", lang.code()),
        Binding::attr("html", "dir", lang.dir()),
        Binding::attr("html", "data-theme", state.theme.as_str()),
        Binding::text("theme-icon", state.theme.icon()),
        Binding::text("lang-text", lang.label()),
        Binding::attr("language-toggle", "href", toggle_href),
        Binding::attr("theme-form", "lang", lang.code()),
        Binding::attr("theme-form", "tab", active_tab.unwrap_or_default()),
        Binding::text("page-title", title),
        Binding::text("footer-name", name.unwrap_or_else(|| DEFAULT_TITLE.to_string())),
        Binding::text("current-year", state.today.year().to_string()),
    ]
}

fn contact_bindings(state: &AppState, sent: bool) -> Vec<Binding> {
    let mut bindings = vec![Binding::attr("contact-form", "lang", state.lang.code())];
    if sent {
        bindings.push(Binding::html(
            "contact-submit",
            format!(
                r#"<span class="sent-label" style="animation-duration: {}ms"><i class="fas fa-check btn-icon"></i> Message Sent!</span>{}"#,
                CONTACT_SENT_MS, CONTACT_SUBMIT_LABEL
            ),
        ));
        bindings.push(Binding::html("contact-submit-state", "sent"));
    }
    bindings
}

/// Static panel replacing the main region after a failed load
pub fn error_panel(message: &str) -> String {
    format!(
        r#"
      <div class="container">
        <div class="card" style="text-align: center; padding: 60px;">
          <div style="font-size: 80px; margin-bottom: 20px;">⚠️</div>
          <h2 style="color: var(--accent-primary); margin-bottom: 20px; font-size: 32px;">Loading Error</h2>
          <p style="color: var(--text-secondary); font-size: 18px; margin-bottom: 30px; line-height: 1.6;">{}</p>
          <button onclick="location.reload()" class="btn-submit" style="margin-top: 20px;">
            <i class="fas fa-redo btn-icon"></i>
            Try Again
          </button>
        </div>
      </div>
    "#,
        html_escape(message)
    )
}
