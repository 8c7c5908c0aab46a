// src/core/tabs.rs
//! Tab discovery and the single-selection tab state machine

use anyhow::Result;
use scraper::{Html, Selector};
use std::collections::HashSet;

use crate::core::template_engine::Binding;

const TAB_SELECTOR: &str = ".tab-item[data-tab]";
const PANEL_SELECTOR: &str = ".tab-content[id]";
const ACTIVE_CLASS: &str = "active";

/// Tabs and panels declared by the page shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<String>,
    panels: HashSet<String>,
}

impl TabSet {
    /// Read the tab controls (in document order) and panel ids from HTML
    pub fn discover(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);
        let tab_selector = parse_selector(TAB_SELECTOR)?;
        let panel_selector = parse_selector(PANEL_SELECTOR)?;

        let mut tabs: Vec<String> = Vec::new();
        for element in document.select(&tab_selector) {
            if let Some(id) = element.value().attr("data-tab") {
                let id = id.trim().to_string();
                if !id.is_empty() && !tabs.contains(&id) {
                    tabs.push(id);
                }
            }
        }

        let panels = document
            .select(&panel_selector)
            .filter_map(|element| element.value().id())
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        Ok(Self { tabs, panels })
    }

    pub fn new<I, J>(tabs: I, panels: J) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            panels: panels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn has_panel(&self, id: &str) -> bool {
        self.panels.contains(id)
    }

    pub fn first(&self) -> Option<&str> {
        self.tabs.first().map(String::as_str)
    }

    /// Every id that can carry the active marker
    fn marker_ids(&self) -> impl Iterator<Item = &str> {
        let extra = self
            .panels
            .iter()
            .filter(|panel| !self.tabs.contains(panel));
        self.tabs.iter().chain(extra).map(String::as_str)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow::anyhow!("Invalid selector {}: {}", selector, e))
}

/// Strip a leading `#` from a URL fragment; empty fragments count as absent
pub fn fragment_id(fragment: &str) -> Option<&str> {
    let id = fragment.trim().trim_start_matches('#');
    (!id.is_empty()).then_some(id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// A tab control was clicked
    Click(String),
    /// The URL fragment changed
    HashChange(String),
    /// Back/forward navigation landed on a fragment
    PopState(String),
}

/// Side effects of a selection, applied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabEffects {
    /// Value to store as the last active tab
    pub persist: Option<String>,
    /// Fragment to write into the URL
    pub fragment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TabManager<'a> {
    set: &'a TabSet,
    active: Option<String>,
}

impl<'a> TabManager<'a> {
    /// Pick the initial tab: fragment, then persisted tab, then the first tab.
    /// The first two only count when they name an existing panel.
    pub fn initialize(
        set: &'a TabSet,
        fragment: Option<&str>,
        persisted: Option<&str>,
    ) -> (Self, TabEffects) {
        let mut manager = Self { set, active: None };

        let from_fragment = fragment
            .and_then(fragment_id)
            .filter(|id| set.has_panel(id));
        let from_storage = persisted
            .map(str::trim)
            .filter(|id| !id.is_empty() && set.has_panel(id));

        let effects = match from_fragment.or(from_storage).or_else(|| set.first()) {
            Some(id) => {
                let id = id.to_string();
                manager.select(id, false)
            }
            None => TabEffects::default(),
        };

        (manager, effects)
    }

    pub fn handle(&mut self, event: TabEvent) -> TabEffects {
        match event {
            TabEvent::Click(id) => {
                let id = id.trim().to_string();
                if id.is_empty() {
                    return TabEffects::default();
                }
                self.select(id, true)
            }
            TabEvent::HashChange(fragment) | TabEvent::PopState(fragment) => {
                match fragment_id(&fragment).filter(|id| self.set.has_panel(id)) {
                    Some(id) => {
                        let id = id.to_string();
                        self.select(id, false)
                    }
                    None => TabEffects::default(),
                }
            }
        }
    }

    fn select(&mut self, id: String, write_fragment: bool) -> TabEffects {
        let effects = TabEffects {
            persist: Some(id.clone()),
            fragment: write_fragment.then(|| id.clone()),
        };
        self.active = Some(id);
        effects
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Active markers for every tab and panel, plus each tab's link
    pub fn bindings(&self, href: impl Fn(&str) -> String) -> Vec<Binding> {
        let mut bindings = Vec::new();
        for id in self.set.marker_ids() {
            let marker = if self.is_active(id) { ACTIVE_CLASS } else { "" };
            bindings.push(Binding::html(&format!("tab-active:{}", id), marker));
        }
        for id in self.set.tabs() {
            bindings.push(Binding::text(&format!("tab-href:{}", id), href(id)));
        }
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template_engine::{apply, TemplateEngine};

    fn set() -> TabSet {
        TabSet::new(
            ["about", "projects", "contact"],
            ["about", "projects", "contact"],
        )
    }

    #[test]
    fn discovers_tabs_from_builtin_shell() {
        let shell = TemplateEngine::builtin().shell();
        let tabs = TabSet::discover(&shell).unwrap();

        assert_eq!(tabs.first(), Some("about"));
        assert!(tabs.tabs().iter().any(|t| t == "contact"));
        assert!(tabs.has_panel("certifications"));
        assert!(!tabs.has_panel("profile-name"));
    }

    #[test]
    fn fragment_beats_persisted_tab() {
        let set = set();
        let (manager, effects) = TabManager::initialize(&set, Some("#contact"), Some("projects"));

        assert_eq!(manager.active(), Some("contact"));
        assert_eq!(effects.persist.as_deref(), Some("contact"));
        assert_eq!(effects.fragment, None);
    }

    #[test]
    fn persisted_tab_used_without_fragment() {
        let set = set();
        let (manager, _) = TabManager::initialize(&set, None, Some("projects"));
        assert_eq!(manager.active(), Some("projects"));
    }

    #[test]
    fn unknown_ids_fall_back_to_first_tab() {
        let set = set();
        let (manager, _) = TabManager::initialize(&set, Some("#nowhere"), Some("gone"));
        assert_eq!(manager.active(), Some("about"));
    }

    #[test]
    fn empty_set_has_no_active_tab() {
        let set = TabSet::default();
        let (manager, effects) = TabManager::initialize(&set, None, None);
        assert_eq!(manager.active(), None);
        assert_eq!(effects, TabEffects::default());
    }

    #[test]
    fn click_persists_and_writes_fragment() {
        let set = set();
        let (mut manager, _) = TabManager::initialize(&set, None, None);
        let effects = manager.handle(TabEvent::Click("projects".to_string()));

        assert_eq!(manager.active(), Some("projects"));
        assert_eq!(effects.persist.as_deref(), Some("projects"));
        assert_eq!(effects.fragment.as_deref(), Some("projects"));
    }

    #[test]
    fn hash_change_ignores_unknown_panels() {
        let set = set();
        let (mut manager, _) = TabManager::initialize(&set, None, None);

        let effects = manager.handle(TabEvent::HashChange("#missing".to_string()));
        assert_eq!(effects, TabEffects::default());
        assert_eq!(manager.active(), Some("about"));

        manager.handle(TabEvent::PopState("#contact".to_string()));
        assert_eq!(manager.active(), Some("contact"));
    }

    #[test]
    fn only_the_active_marker_is_set() {
        let set = set();
        let (manager, _) = TabManager::initialize(&set, Some("projects"), None);
        let out = apply(
            "{{tab-active:about}}|{{tab-active:projects}}|{{tab-href:contact}}",
            &manager.bindings(|id| format!("/tab/{}", id)),
        );
        assert_eq!(out, "|active|/tab/contact");
    }
}
