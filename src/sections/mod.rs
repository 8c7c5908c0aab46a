// src/sections/mod.rs
//! Section renderers. Each one maps a document slice to slot bindings and
//! emits nothing when its data key is absent.

pub mod certifications;
pub mod education;
pub mod personal;
pub mod projects;
pub mod skills;
pub mod summary;

use crate::core::template_engine::Binding;
use crate::types::{AppState, CvDocument};
use crate::utils::html_escape;

/// Run every renderer in page order
pub fn render_all(doc: &CvDocument, state: &AppState) -> Vec<Binding> {
    let mut bindings = Vec::new();
    bindings.extend(personal::render(doc.personal.personal.as_ref(), state));
    bindings.extend(education::render(doc.education.education.as_ref(), state));
    bindings.extend(summary::render(doc.summary.about.as_ref(), state));
    bindings.extend(projects::render(doc.projects.software_projects.as_deref(), state));
    bindings.extend(skills::render(doc.summary.skills.as_ref(), state));
    bindings.extend(certifications::render(
        doc.courses.certifications.as_deref(),
        state,
    ));
    bindings
}

/// Card shown in place of an empty list
pub(crate) fn empty_card(icon: &str, title: &str, body: &str) -> String {
    format!(
        r#"
      <div class="card empty-state" style="text-align: center; padding: 60px;">
        <div style="font-size: 80px; margin-bottom: 20px;">{}</div>
        <h3 style="color: var(--accent-primary); margin-bottom: 15px;">{}</h3>
        <p style="color: var(--text-secondary); font-size: 17px;">{}</p>
      </div>
    "#,
        icon,
        html_escape(title),
        html_escape(body)
    )
}

/// Small placeholder for an empty grid inside a card
pub(crate) fn empty_grid_item(text: &str) -> String {
    format!(r#"<div class="empty-item">{}</div>"#, html_escape(text))
}
