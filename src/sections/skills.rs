// src/sections/skills.rs
use crate::core::icons::{
    RuleTable, DOMAIN_ICONS, FRAMEWORK_ICONS, PROGRAMMING_LANGUAGE_ICONS, SOFT_SKILL_ICONS,
    TOOL_ICONS,
};
use crate::core::template_engine::Binding;
use crate::sections::empty_grid_item;
use crate::types::cv_data::{Localized, Skills};
use crate::types::AppState;
use crate::utils::html_escape;

/// One grid per skill category
struct SkillGrid<'a> {
    target: &'static str,
    items: Option<&'a [Localized]>,
    icons: &'static RuleTable,
}

fn grids(skills: &Skills) -> [SkillGrid<'_>; 5] {
    [
        SkillGrid {
            target: "programming-languages-grid",
            items: skills.programming_languages.as_deref(),
            icons: &PROGRAMMING_LANGUAGE_ICONS,
        },
        SkillGrid {
            target: "frameworks-grid",
            items: skills.frameworks_libraries.as_deref(),
            icons: &FRAMEWORK_ICONS,
        },
        SkillGrid {
            target: "domains-grid",
            items: skills.domains.as_deref(),
            icons: &DOMAIN_ICONS,
        },
        SkillGrid {
            target: "tools-grid",
            items: skills.tools_platforms.as_deref(),
            icons: &TOOL_ICONS,
        },
        SkillGrid {
            target: "soft-skills-grid",
            items: skills.soft_skills.as_deref(),
            icons: &SOFT_SKILL_ICONS,
        },
    ]
}

pub fn render(skills: Option<&Skills>, state: &AppState) -> Vec<Binding> {
    let Some(skills) = skills else {
        return Vec::new();
    };

    grids(skills)
        .into_iter()
        .filter_map(|grid| {
            let items = grid.items?;
            let html = if items.is_empty() {
                empty_grid_item("Nothing listed yet")
            } else {
                items
                    .iter()
                    .map(|item| skill_item(&item.resolve(state.lang), grid.icons))
                    .collect::<String>()
            };
            Some(Binding::html(grid.target, html))
        })
        .collect()
}

fn skill_item(name: &str, icons: &RuleTable) -> String {
    format!(
        r#"<div class="skill-item">{} {}</div>"#,
        icons.select_text(name),
        html_escape(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template_engine::SlotContent;
    use crate::types::{Lang, Theme};
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::new(Lang::En, Theme::Dark, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn items(names: &[&str]) -> Option<Vec<Localized>> {
        Some(names.iter().map(|n| Localized::from(*n)).collect())
    }

    fn html_for<'a>(bindings: &'a [Binding], target: &str) -> Option<&'a str> {
        bindings
            .iter()
            .find(|b| b.target == target)
            .map(|b| match &b.content {
                SlotContent::Html(html) => html.as_str(),
                other => panic!("unexpected content {:?}", other),
            })
    }

    #[test]
    fn each_category_uses_its_table() {
        let skills = Skills {
            programming_languages: items(&["Python", "Rust"]),
            tools_platforms: items(&["GitHub", "Git", "Linux"]),
            soft_skills: items(&["Problem Solving"]),
            ..Default::default()
        };
        let bindings = render(Some(&skills), &state());

        let languages = html_for(&bindings, "programming-languages-grid").unwrap();
        assert!(languages.contains(r#"<div class="skill-item">🐍 Python</div>"#));
        assert!(languages.contains(r#"<div class="skill-item">💻 Rust</div>"#));

        let tools = html_for(&bindings, "tools-grid").unwrap();
        assert!(tools.contains("🐙 GitHub"));
        assert!(tools.contains("📦 Git<"));
        assert!(tools.contains("🐧 Linux"));

        assert!(html_for(&bindings, "soft-skills-grid")
            .unwrap()
            .contains("🧩 Problem Solving"));
        assert!(html_for(&bindings, "domains-grid").is_none());
    }

    #[test]
    fn empty_category_shows_placeholder() {
        let skills = Skills {
            domains: Some(Vec::new()),
            ..Default::default()
        };
        let bindings = render(Some(&skills), &state());
        assert!(html_for(&bindings, "domains-grid")
            .unwrap()
            .contains("Nothing listed yet"));
    }
}
