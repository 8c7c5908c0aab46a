// src/sections/education.rs
use crate::core::formatters::fixed_decimals;
use crate::core::template_engine::Binding;
use crate::types::cv_data::{Education, Localized};
use crate::types::AppState;
use crate::utils::{js_number, sanitize_text};

/// Labelled single-value rows: (slot, label prefix, field)
fn labelled_rows(education: &Education) -> [(&'static str, &'static str, &Option<Localized>); 4] {
    [
        ("education-university", "🏛️ University", &education.university),
        ("education-faculty", "🏢 Faculty", &education.faculty),
        ("education-level", "📚 Level", &education.level),
        ("education-status", "✅ Status", &education.status),
    ]
}

pub fn render(education: Option<&Education>, state: &AppState) -> Vec<Binding> {
    let Some(education) = education else {
        return Vec::new();
    };
    let lang = state.lang;
    let mut bindings = Vec::new();

    if let Some(degree) = education.degree.as_ref().filter(|d| d.is_present()) {
        bindings.push(Binding::text("education-degree", degree.resolve(lang)));
    }

    for (slot, label, field) in labelled_rows(education) {
        if let Some(value) = field.as_ref().filter(|v| v.is_present()) {
            bindings.push(Binding::text(
                slot,
                format!("{}: {}", label, value.resolve(lang)),
            ));
        }
    }

    if let Some(enrollment) = &education.enrollment {
        let month = enrollment
            .month
            .as_ref()
            .map(|m| m.resolve(lang))
            .unwrap_or_default();
        let year = sanitize_text(&enrollment.year);
        bindings.push(Binding::text(
            "education-enrollment",
            format!("📅 Enrolled: {} {}", month, year),
        ));
    }

    if let Some(gpa) = &education.gpa {
        if let Some(value) = gpa.value {
            let scale = match gpa.scale.as_f64() {
                Some(n) => js_number(n),
                None => sanitize_text(&gpa.scale),
            };
            bindings.push(Binding::text(
                "education-gpa",
                format!("📈 GPA: {}/{}", fixed_decimals(value, 2), scale),
            ));
        }
    }

    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cv_data::{Enrollment, Gpa};
    use crate::types::{Lang, Theme};
    use chrono::NaiveDate;
    use serde_json::json;

    fn state(lang: Lang) -> AppState {
        AppState::new(lang, Theme::Dark, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn text_of(bindings: &[Binding], slot: &str) -> Option<String> {
        bindings.iter().find(|b| b.slot() == slot).map(|b| match &b.content {
            crate::core::template_engine::SlotContent::Text(t) => t.clone(),
            other => panic!("unexpected content {:?}", other),
        })
    }

    #[test]
    fn renders_labelled_rows() {
        let education = Education {
            degree: Some(json!({ "en": "B.Sc. Computer Science", "ar": "بكالوريوس" }).into()),
            university: Some("University of Jordan".into()),
            status: Some(json!({ "en": "Graduated" }).into()),
            enrollment: Some(Enrollment {
                month: Some(json!({ "en": "September", "ar": "أيلول" }).into()),
                year: json!(2020),
            }),
            gpa: Some(Gpa {
                value: Some(3.456),
                scale: json!(4),
            }),
            ..Default::default()
        };
        let bindings = render(Some(&education), &state(Lang::En));

        assert_eq!(
            text_of(&bindings, "education-degree").as_deref(),
            Some("B.Sc. Computer Science")
        );
        assert_eq!(
            text_of(&bindings, "education-university").as_deref(),
            Some("🏛️ University: University of Jordan")
        );
        assert_eq!(
            text_of(&bindings, "education-status").as_deref(),
            Some("✅ Status: Graduated")
        );
        assert_eq!(
            text_of(&bindings, "education-enrollment").as_deref(),
            Some("📅 Enrolled: September 2020")
        );
        assert_eq!(
            text_of(&bindings, "education-gpa").as_deref(),
            Some("📈 GPA: 3.46/4")
        );
        assert!(text_of(&bindings, "education-faculty").is_none());
    }

    #[test]
    fn gpa_ties_round_up() {
        for (value, expected) in [(3.125, "📈 GPA: 3.13/4"), (3.625, "📈 GPA: 3.63/4")] {
            let education = Education {
                gpa: Some(Gpa {
                    value: Some(value),
                    scale: json!(4),
                }),
                ..Default::default()
            };
            let bindings = render(Some(&education), &state(Lang::En));
            assert_eq!(text_of(&bindings, "education-gpa").as_deref(), Some(expected));
        }
    }

    #[test]
    fn arabic_month_in_enrollment() {
        let education = Education {
            enrollment: Some(Enrollment {
                month: Some(json!({ "en": "September", "ar": "أيلول" }).into()),
                year: json!("2020"),
            }),
            ..Default::default()
        };
        let bindings = render(Some(&education), &state(Lang::Ar));
        assert_eq!(
            text_of(&bindings, "education-enrollment").as_deref(),
            Some("📅 Enrolled: أيلول 2020")
        );
    }

    #[test]
    fn gpa_without_value_is_skipped() {
        let education = Education {
            gpa: Some(Gpa {
                value: None,
                scale: json!(4),
            }),
            ..Default::default()
        };
        assert!(render(Some(&education), &state(Lang::En)).is_empty());
    }
}
