// src/sections/projects.rs
use crate::core::icons::{IconSubject, PROJECT_ICONS};
use crate::core::template_engine::Binding;
use crate::sections::empty_card;
use crate::types::cv_data::Project;
use crate::types::AppState;
use crate::utils::{html_escape, sanitize_text};

pub const TARGET: &str = "projects-grid";

pub fn render(projects: Option<&[Project]>, state: &AppState) -> Vec<Binding> {
    let Some(projects) = projects else {
        return Vec::new();
    };

    if projects.is_empty() {
        return vec![Binding::html(
            TARGET,
            empty_card(
                "📁",
                "No Projects Available",
                "Check back soon for new projects!",
            ),
        )];
    }

    let html = projects
        .iter()
        .map(|project| project_card(project, state))
        .collect::<String>();
    vec![Binding::html(TARGET, html)]
}

fn project_card(project: &Project, state: &AppState) -> String {
    let lang = state.lang;
    let name = project.name.resolve(lang);
    let kind = project.project_type.resolve(lang);
    let description = project.description.resolve(lang);
    let status = project.status.resolve(lang);

    let icon = PROJECT_ICONS.select(&IconSubject {
        name: &name,
        kind: &kind,
    });

    let tech_tags = project
        .technologies
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|tech| {
            format!(
                r#"<span class="tech-tag">{}</span>"#,
                html_escape(&sanitize_text(tech))
            )
        })
        .collect::<String>();

    let link = project
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| {
            format!(
                r#"
            <a href="{}" target="_blank" class="project-link">
              <span>🔗</span> View Project
            </a>
          "#,
                html_escape(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"
      <div class="project-card">
        <div class="project-header">
          <div class="project-name">{icon} {name}</div>
          <div class="project-type">{kind}</div>
        </div>
        <div class="project-description">{description}</div>
        <div class="project-technologies">
          {tech_tags}
        </div>
        <div class="project-footer">
          <div class="project-status">{status}</div>
          {link}
        </div>
      </div>
    "#,
        icon = icon,
        name = html_escape(&name),
        kind = html_escape(&kind),
        description = html_escape(&description),
        tech_tags = tech_tags,
        status = html_escape(&status),
        link = link,
    )
}
