// src/sections/personal.rs
use crate::core::formatters::{age, format_age, parse_date};
use crate::core::template_engine::Binding;
use crate::types::cv_data::{Localized, Location, Personal};
use crate::types::AppState;
use crate::utils::html_escape;

const DEFAULT_PROFILE_IMAGE: &str = "images/profile_picture.png";
const DEFAULT_PROFILE_ALT: &str = "Profile Picture";
const PROFILE_IMAGE_FALLBACK: &str = "this.onerror=null;this.alt='Profile picture not found';this.src='data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"220\" height=\"220\" viewBox=\"0 0 100 100\"><rect width=\"100\" height=\"100\" fill=\"%231a1a2f\"/><text x=\"50\" y=\"50\" font-family=\"Arial\" font-size=\"40\" fill=\"%236c63ff\" text-anchor=\"middle\" dy=\".3em\">👤</text></svg>'";

pub fn render(personal: Option<&Personal>, state: &AppState) -> Vec<Binding> {
    let Some(personal) = personal else {
        return Vec::new();
    };
    let lang = state.lang;
    let mut bindings = Vec::new();

    if let Some(image) = &personal.profile_image {
        let src = image
            .src
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_PROFILE_IMAGE);
        let alt = image
            .alt
            .as_ref()
            .map(|alt| alt.resolve(lang))
            .filter(|alt| !alt.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE_ALT.to_string());

        bindings.push(Binding::attr("profile-image", "src", src));
        bindings.push(Binding::attr("profile-image", "alt", alt));
        bindings.push(Binding::attr(
            "profile-image",
            "onerror",
            PROFILE_IMAGE_FALLBACK,
        ));
    }

    if let Some(name) = present(&personal.full_name) {
        bindings.push(Binding::text("profile-name", name.resolve(lang)));
    }

    if let Some(location) = &personal.location {
        let place = location_text(location, state);
        bindings.push(Binding::text("profile-location", place.clone()));
        bindings.push(Binding::text("contact-location", place));
    }

    if let Some(birth) = personal.birth_date.as_deref().and_then(parse_date) {
        let age_text = format_age(age(birth, state.today), lang);
        bindings.push(Binding::text("profile-age", age_text.clone()));
        bindings.push(Binding::text("contact-age", age_text));
    }

    if let Some(gender) = present(&personal.gender) {
        bindings.push(Binding::text("profile-status", gender.resolve(lang)));
    }

    if let Some(contact) = &personal.contact {
        if let Some(phone) = non_empty(contact.phone.as_deref()) {
            bindings.push(Binding::text("contact-phone", phone));
        }

        if let Some(emails) = &contact.emails {
            let slots = ["contact-email-primary", "contact-email-secondary"];
            for (slot, email) in slots.iter().zip(emails) {
                if let Some(email) = non_empty(Some(email.as_str())) {
                    bindings.push(Binding::html(slot, mailto(email)));
                }
            }
        }
    }

    if let Some(links) = &personal.social_links {
        if let Some(url) = non_empty(links.linkedin.as_deref()) {
            bindings.push(Binding::attr("linkedin-link", "href", url));
        }
        if let Some(url) = non_empty(links.github.as_deref()) {
            bindings.push(Binding::attr("github-link", "href", url));
        }
        if let Some(url) = links
            .credly
            .as_ref()
            .and_then(|urls| urls.first())
            .and_then(|url| non_empty(Some(url.as_str())))
        {
            bindings.push(Binding::attr("credly-link", "href", url));
        }
    }

    bindings
}

fn location_text(location: &Location, state: &AppState) -> String {
    let part = |value: &Option<Localized>| {
        value
            .as_ref()
            .map(|v| v.resolve(state.lang))
            .unwrap_or_default()
    };
    format!("{}, {}", part(&location.city), part(&location.country))
}

fn present(value: &Option<Localized>) -> Option<&Localized> {
    value.as_ref().filter(|v| v.is_present())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn mailto(email: &str) -> String {
    let email = html_escape(email);
    format!(r#"<a href="mailto:{}">{}</a>"#, email, email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template_engine::SlotContent;
    use crate::types::cv_data::{Contact, ProfileImage, SocialLinks};
    use crate::types::{Lang, Theme};
    use chrono::NaiveDate;
    use serde_json::json;

    fn state(lang: Lang) -> AppState {
        AppState::new(lang, Theme::Dark, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap())
    }

    fn find<'a>(bindings: &'a [Binding], slot: &str) -> Option<&'a SlotContent> {
        bindings.iter().find(|b| b.slot() == slot).map(|b| &b.content)
    }

    fn text(bindings: &[Binding], slot: &str) -> Option<String> {
        match find(bindings, slot) {
            Some(SlotContent::Text(t)) | Some(SlotContent::Html(t)) => Some(t.clone()),
            Some(SlotContent::Attr { value, .. }) => Some(value.clone()),
            None => None,
        }
    }

    fn sample() -> Personal {
        Personal {
            full_name: Some(json!({ "en": "Jane Doe", "ar": "جين دو" }).into()),
            location: Some(Location {
                city: Some(json!({ "en": "Amman", "ar": "عمّان" }).into()),
                country: Some(json!({ "en": "Jordan", "ar": "الأردن" }).into()),
            }),
            birth_date: Some("2000-06-15".to_string()),
            contact: Some(Contact {
                phone: Some("  +962 700 000 000 ".to_string()),
                emails: Some(vec!["jane@example.com".to_string()]),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn missing_section_renders_nothing() {
        assert!(render(None, &state(Lang::En)).is_empty());
    }

    #[test]
    fn renders_identity_and_contact() {
        let personal = sample();
        let bindings = render(Some(&personal), &state(Lang::En));

        assert_eq!(text(&bindings, "profile-name").as_deref(), Some("Jane Doe"));
        assert_eq!(
            text(&bindings, "profile-location").as_deref(),
            Some("Amman, Jordan")
        );
        assert_eq!(
            text(&bindings, "contact-location"),
            text(&bindings, "profile-location")
        );
        assert_eq!(text(&bindings, "profile-age").as_deref(), Some("23 years old"));
        assert_eq!(
            text(&bindings, "contact-phone").as_deref(),
            Some("+962 700 000 000")
        );
        assert_eq!(
            text(&bindings, "contact-email-primary").as_deref(),
            Some(r#"<a href="mailto:jane@example.com">jane@example.com</a>"#)
        );
        assert!(find(&bindings, "contact-email-secondary").is_none());
        assert!(find(&bindings, "profile-image@src").is_none());
    }

    #[test]
    fn arabic_uses_arabic_text() {
        let personal = sample();
        let bindings = render(Some(&personal), &state(Lang::Ar));

        assert_eq!(text(&bindings, "profile-name").as_deref(), Some("جين دو"));
        assert_eq!(
            text(&bindings, "profile-location").as_deref(),
            Some("عمّان, الأردن")
        );
        assert_eq!(text(&bindings, "profile-age").as_deref(), Some("23 سنة"));
    }

    #[test]
    fn profile_image_falls_back() {
        let personal = Personal {
            profile_image: Some(ProfileImage::default()),
            ..Default::default()
        };
        let bindings = render(Some(&personal), &state(Lang::En));

        assert_eq!(
            text(&bindings, "profile-image@src").as_deref(),
            Some(DEFAULT_PROFILE_IMAGE)
        );
        assert_eq!(
            text(&bindings, "profile-image@alt").as_deref(),
            Some(DEFAULT_PROFILE_ALT)
        );
        assert!(find(&bindings, "profile-image@onerror").is_some());
    }

    #[test]
    fn social_links_use_first_credly_url() {
        let personal = Personal {
            social_links: Some(SocialLinks {
                linkedin: Some("https://linkedin.com/in/jane".to_string()),
                github: None,
                credly: Some(vec![
                    "https://credly.com/a".to_string(),
                    "https://credly.com/b".to_string(),
                ]),
            }),
            ..Default::default()
        };
        let bindings = render(Some(&personal), &state(Lang::En));

        assert_eq!(
            text(&bindings, "credly-link@href").as_deref(),
            Some("https://credly.com/a")
        );
        assert!(find(&bindings, "github-link@href").is_none());
    }

    #[test]
    fn unparsable_birth_date_is_skipped() {
        let personal = Personal {
            birth_date: Some("someday".to_string()),
            ..Default::default()
        };
        let bindings = render(Some(&personal), &state(Lang::En));
        assert!(find(&bindings, "profile-age").is_none());
    }
}
