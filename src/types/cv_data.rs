// src/types/cv_data.rs
//! CV documents as served by the five JSON files

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::localization;
use crate::types::state::Lang;

// ===== Localized text =====

/// A JSON value that may hold text in several languages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized(pub Value);

impl Localized {
    pub fn resolve(&self, lang: Lang) -> String {
        localization::resolve(&self.0, lang)
    }

    pub fn is_present(&self) -> bool {
        crate::utils::is_truthy(&self.0)
    }
}

impl From<Value> for Localized {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for Localized {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

// ===== Assembled document =====

/// The five documents of one load cycle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvDocument {
    pub personal: PersonalDoc,
    pub education: EducationDoc,
    pub projects: ProjectsDoc,
    pub summary: SummaryDoc,
    pub courses: CoursesDoc,
}

// ===== personal.json =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalDoc {
    #[serde(default)]
    pub personal: Option<Personal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub profile_image: Option<ProfileImage>,
    pub full_name: Option<Localized>,
    pub location: Option<Location>,
    pub birth_date: Option<String>,
    pub gender: Option<Localized>,
    pub contact: Option<Contact>,
    pub social_links: Option<SocialLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileImage {
    pub src: Option<String>,
    pub alt: Option<Localized>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: Option<Localized>,
    pub country: Option<Localized>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub phone: Option<String>,
    pub emails: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub credly: Option<Vec<String>>,
}

// ===== education.json =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationDoc {
    #[serde(default)]
    pub education: Option<Education>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: Option<Localized>,
    pub university: Option<Localized>,
    pub faculty: Option<Localized>,
    pub level: Option<Localized>,
    pub enrollment: Option<Enrollment>,
    pub gpa: Option<Gpa>,
    pub status: Option<Localized>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Enrollment {
    pub month: Option<Localized>,
    pub year: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gpa {
    pub value: Option<f64>,
    pub scale: Value,
}

// ===== project.json =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsDoc {
    #[serde(default)]
    pub software_projects: Option<Vec<Project>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: Localized,
    #[serde(rename = "type")]
    pub project_type: Localized,
    pub description: Localized,
    pub status: Localized,
    pub technologies: Option<Vec<Value>>,
    pub url: Option<String>,
}

// ===== summary.json =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryDoc {
    #[serde(default)]
    pub about: Option<About>,
    #[serde(default)]
    pub skills: Option<Skills>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub headline: Option<Localized>,
    pub summary: Option<Localized>,
    pub interests: Option<Vec<Localized>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub programming_languages: Option<Vec<Localized>>,
    pub frameworks_libraries: Option<Vec<Localized>>,
    pub domains: Option<Vec<Localized>>,
    pub tools_platforms: Option<Vec<Localized>>,
    pub soft_skills: Option<Vec<Localized>>,
}

// ===== courses.json =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoursesDoc {
    #[serde(default)]
    pub certifications: Option<Vec<Certification>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub title: Localized,
    pub provider: Localized,
    pub category: Localized,
    pub completion_date: Option<String>,
    pub badge_url: Option<String>,
}
