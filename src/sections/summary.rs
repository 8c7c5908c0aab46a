// src/sections/summary.rs
use crate::core::icons::interest_icon;
use crate::core::template_engine::Binding;
use crate::sections::empty_grid_item;
use crate::types::cv_data::About;
use crate::types::AppState;
use crate::utils::html_escape;

pub fn render(about: Option<&About>, state: &AppState) -> Vec<Binding> {
    let Some(about) = about else {
        return Vec::new();
    };
    let lang = state.lang;
    let mut bindings = Vec::new();

    if let Some(headline) = about.headline.as_ref().filter(|h| h.is_present()) {
        bindings.push(Binding::text("profile-headline", headline.resolve(lang)));
    }

    if let Some(summary) = about.summary.as_ref().filter(|s| s.is_present()) {
        bindings.push(Binding::text("about-summary", summary.resolve(lang)));
    }

    if let Some(interests) = &about.interests {
        let html = if interests.is_empty() {
            empty_grid_item("No interests listed yet")
        } else {
            interests
                .iter()
                .map(|interest| interest_card(&interest.resolve(lang)))
                .collect::<String>()
        };
        bindings.push(Binding::html("interests-grid", html));
    }

    bindings
}

fn interest_card(name: &str) -> String {
    format!(
        r#"
        <div class="interest-card">
          <div class="interest-icon">{}</div>
          <div class="interest-name">{}</div>
        </div>
      "#,
        interest_icon(name),
        html_escape(name)
    )
}
