// src/core/template_engine.rs
//! Slot-based page templates.
//!
//! A template marks every writable slot with `{{name}}` or `{{name|fallback}}`.
//! Element content slots use the element id (`{{profile-name}}`), attribute
//! slots use `id@attribute` (`{{profile-image@src}}`). Renderers produce
//! [`Binding`]s; slots nobody binds fall back to their default text, and
//! bindings whose slot is not in the template are dropped.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::utils::html_escape;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

pub const LAYOUT_FILE: &str = "layout.html";
pub const MAIN_FILE: &str = "main.html";

const DEFAULT_LAYOUT: &str = include_str!("../../templates/layout.html");
const DEFAULT_MAIN: &str = include_str!("../../templates/main.html");

// ===== Bindings =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContent {
    /// Plain text, escaped on apply
    Text(String),
    /// Markup inserted as-is
    Html(String),
    /// Attribute value, escaped on apply
    Attr { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub target: String,
    pub content: SlotContent,
}

impl Binding {
    pub fn text(target: &str, text: impl Into<String>) -> Self {
        Self {
            target: target.to_string(),
            content: SlotContent::Text(text.into()),
        }
    }

    pub fn html(target: &str, html: impl Into<String>) -> Self {
        Self {
            target: target.to_string(),
            content: SlotContent::Html(html.into()),
        }
    }

    pub fn attr(target: &str, name: &str, value: impl Into<String>) -> Self {
        Self {
            target: target.to_string(),
            content: SlotContent::Attr {
                name: name.to_string(),
                value: value.into(),
            },
        }
    }

    /// Placeholder name this binding fills
    pub fn slot(&self) -> String {
        match &self.content {
            SlotContent::Attr { name, .. } => format!("{}@{}", self.target, name),
            _ => self.target.clone(),
        }
    }

    fn rendered(&self) -> String {
        match &self.content {
            SlotContent::Text(text) => html_escape(text),
            SlotContent::Html(html) => html.clone(),
            SlotContent::Attr { value, .. } => html_escape(value),
        }
    }
}

/// Fill every placeholder of `template` in a single pass.
///
/// Later bindings for the same slot replace earlier ones. Inserted content is
/// never scanned again, so data containing `{{` stays literal.
pub fn apply(template: &str, bindings: &[Binding]) -> String {
    let values: HashMap<String, String> = bindings
        .iter()
        .map(|binding| (binding.slot(), binding.rendered()))
        .collect();

    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            // Unterminated marker, keep the remainder verbatim
            result.push_str(&rest[start..]);
            return result;
        };

        let token = &after_open[..end];
        let (name, fallback) = match token.split_once('|') {
            Some((name, fallback)) => (name.trim(), fallback),
            None => (token.trim(), ""),
        };

        match values.get(name) {
            Some(value) => result.push_str(value),
            None => result.push_str(fallback),
        }

        rest = &after_open[end + CLOSE.len()..];
    }

    result.push_str(rest);
    result
}

/// Slot names declared by a template, in order of appearance
pub fn slots(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };
        let token = &after_open[..end];
        let name = token.split('|').next().unwrap_or(token).trim().to_string();
        if !names.contains(&name) {
            names.push(name);
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    names
}

// ===== Shell templates =====

/// The page shell: a layout wrapping a main content region
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    pub layout: String,
    pub main: String,
    source: Option<PathBuf>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateEngine {
    /// Built-in shell compiled into the binary
    pub fn builtin() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.to_string(),
            main: DEFAULT_MAIN.to_string(),
            source: None,
        }
    }

    pub fn from_strings(layout: impl Into<String>, main: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            main: main.into(),
            source: None,
        }
    }

    /// Load the shell from a templates directory. Missing files fall back to
    /// the built-in ones.
    pub fn load(templates_dir: &Path) -> Result<Self> {
        if !templates_dir.exists() {
            warn!(
                "Templates directory does not exist: {}, using built-in templates",
                templates_dir.display()
            );
            return Ok(Self::builtin());
        }

        let layout = Self::read_or_default(&templates_dir.join(LAYOUT_FILE), DEFAULT_LAYOUT)?;
        let main = Self::read_or_default(&templates_dir.join(MAIN_FILE), DEFAULT_MAIN)?;

        info!(
            "Loaded page templates from {} ({} slots)",
            templates_dir.display(),
            slots(&layout).len() + slots(&main).len()
        );
        Ok(Self {
            layout,
            main,
            source: Some(templates_dir.to_path_buf()),
        })
    }

    fn read_or_default(path: &Path, default: &str) -> Result<String> {
        if path.exists() {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {}", path.display()))
        } else {
            warn!("Template {} not found, using built-in", path.display());
            Ok(default.to_string())
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Layout with the unrendered main region spliced in, as the browser
    /// would see it before any data arrives
    pub fn shell(&self) -> String {
        apply(&self.layout, &[Binding::html("main-content", self.main.clone())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_text_html_and_attribute_slots() {
        let template = r#"<h1 id="n">{{name}}</h1><div>{{grid}}</div><a href="{{link@href}}">x</a>"#;
        let out = apply(
            template,
            &[
                Binding::text("name", "Tom & Jerry"),
                Binding::html("grid", "<span>ok</span>"),
                Binding::attr("link", "href", "https://example.com/?a=1&b=2"),
            ],
        );

        assert_eq!(
            out,
            r#"<h1 id="n">Tom &amp; Jerry</h1><div><span>ok</span></div><a href="https://example.com/?a=1&amp;b=2">x</a>"#
        );
    }

    #[test]
    fn unbound_slots_use_fallback() {
        let out = apply("<p>{{age|Loading...}}</p><p>{{phone}}</p>", &[]);
        assert_eq!(out, "<p>Loading...</p><p></p>");
    }

    #[test]
    fn bindings_without_slot_are_ignored() {
        let out = apply("<p>{{name}}</p>", &[Binding::text("missing-target", "x")]);
        assert_eq!(out, "<p></p>");
    }

    #[test]
    fn later_binding_overwrites_earlier() {
        let out = apply(
            "{{name}}",
            &[Binding::text("name", "first"), Binding::text("name", "second")],
        );
        assert_eq!(out, "second");
    }

    #[test]
    fn inserted_content_is_not_rescanned() {
        let out = apply(
            "{{bio}}|{{name}}",
            &[Binding::html("bio", "{{name}}"), Binding::text("name", "Jane")],
        );
        assert_eq!(out, "{{name}}|Jane");
    }

    #[test]
    fn unterminated_marker_is_kept() {
        assert_eq!(apply("a {{b", &[]), "a {{b");
    }

    #[test]
    fn lists_declared_slots() {
        let names = slots("{{a}} {{b@href|#}} {{a}}");
        assert_eq!(names, vec!["a".to_string(), "b@href".to_string()]);
    }

    #[test]
    fn builtin_shell_declares_main_sections() {
        let engine = TemplateEngine::builtin();
        let declared = slots(&engine.main);
        for slot in [
            "profile-name",
            "projects-grid",
            "certifications-list",
            "tools-grid",
        ] {
            assert!(declared.iter().any(|s| s == slot), "missing slot {}", slot);
        }
        assert!(engine.shell().contains("tab-content"));
    }
}
