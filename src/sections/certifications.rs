// src/sections/certifications.rs
use crate::core::formatters::format_date;
use crate::core::icons::{IconSubject, CERTIFICATION_ICONS};
use crate::core::template_engine::Binding;
use crate::sections::empty_card;
use crate::types::cv_data::Certification;
use crate::types::AppState;
use crate::utils::html_escape;

pub const TARGET: &str = "certifications-list";

pub fn render(certifications: Option<&[Certification]>, state: &AppState) -> Vec<Binding> {
    let Some(certifications) = certifications else {
        return Vec::new();
    };

    if certifications.is_empty() {
        return vec![Binding::html(
            TARGET,
            empty_card(
                "📜",
                "No Certifications Yet",
                "Working on earning new certifications!",
            ),
        )];
    }

    let html = certifications
        .iter()
        .map(|cert| certification_card(cert, state))
        .collect::<String>();
    vec![Binding::html(TARGET, html)]
}

fn certification_card(cert: &Certification, state: &AppState) -> String {
    let lang = state.lang;
    let title = cert.title.resolve(lang);
    let provider = cert.provider.resolve(lang);
    let category = cert.category.resolve(lang);

    let completed = cert
        .completion_date
        .as_deref()
        .filter(|date| !date.trim().is_empty())
        .map(|date| format_date(date, lang))
        .unwrap_or_else(|| "N/A".to_string());

    let icon = CERTIFICATION_ICONS.select(&IconSubject {
        name: &title,
        kind: &category,
    });

    let badge = cert
        .badge_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| {
            format!(
                r#"
          <a href="{}" target="_blank" class="certification-badge">
            🏅 View Badge
          </a>
        "#,
                html_escape(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"
      <div class="certification-card">
        <div class="certification-title">{} {}</div>
        <div class="certification-provider">{} - {}</div>
        <div class="certification-date">Completed: {}</div>
        {}
      </div>
    "#,
        icon,
        html_escape(&title),
        html_escape(&provider),
        html_escape(&category),
        html_escape(&completed),
        badge
    )
}
