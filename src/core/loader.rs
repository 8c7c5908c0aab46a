// src/core/loader.rs
//! Document sources and the all-or-nothing CV loader

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::types::cv_data::{CoursesDoc, CvDocument, EducationDoc, PersonalDoc, ProjectsDoc, SummaryDoc};

pub const PERSONAL_FILE: &str = "personal.json";
pub const EDUCATION_FILE: &str = "education.json";
pub const PROJECT_FILE: &str = "project.json";
pub const SUMMARY_FILE: &str = "summary.json";
pub const COURSES_FILE: &str = "courses.json";

/// All documents one load cycle needs
pub const DOCUMENTS: [&str; 5] = [
    PERSONAL_FILE,
    EDUCATION_FILE,
    PROJECT_FILE,
    SUMMARY_FILE,
    COURSES_FILE,
];

/// Somewhere the JSON documents can be fetched from
pub trait DocumentSource: Send + Sync {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<Value>> + Send;

    /// Human readable origin for logs
    fn describe(&self) -> String;
}

// ===== HTTP =====

/// Fetches documents with `GET <base_url>/<path>`
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to load {}", path))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Failed to load {}: {}", path, status.as_u16());
        }

        response
            .json::<Value>()
            .await
            .with_context(|| format!("Failed to parse {} as JSON", path))
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

// ===== Filesystem =====

/// Reads documents from a local directory
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Value> {
        let file = self.dir.join(path);
        debug!("Reading {}", file.display());

        let content = tokio::fs::read_to_string(&file)
            .await
            .with_context(|| format!("Failed to load {}: {}", path, file.display()))?;

        serde_json::from_str(&content).with_context(|| format!("Failed to parse {} as JSON", path))
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

// ===== Configured source =====

/// The source a server or CLI run is configured with
pub enum DataSource {
    Http(HttpSource),
    Dir(DirSource),
    #[cfg(test)]
    Memory(tests::MemorySource),
}

impl DocumentSource for DataSource {
    async fn fetch(&self, path: &str) -> Result<Value> {
        match self {
            DataSource::Http(source) => source.fetch(path).await,
            DataSource::Dir(source) => source.fetch(path).await,
            #[cfg(test)]
            DataSource::Memory(source) => source.fetch(path).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            DataSource::Http(source) => source.describe(),
            DataSource::Dir(source) => source.describe(),
            #[cfg(test)]
            DataSource::Memory(source) => source.describe(),
        }
    }
}

// ===== Loader =====

pub struct CvLoader<S> {
    source: S,
}

impl<S: DocumentSource> CvLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch all five documents concurrently. Any failure fails the whole load.
    pub async fn load_all(&self) -> Result<CvDocument> {
        let (personal, education, projects, summary, courses) = tokio::try_join!(
            self.load::<PersonalDoc>(PERSONAL_FILE),
            self.load::<EducationDoc>(EDUCATION_FILE),
            self.load::<ProjectsDoc>(PROJECT_FILE),
            self.load::<SummaryDoc>(SUMMARY_FILE),
            self.load::<CoursesDoc>(COURSES_FILE),
        )?;

        info!("Loaded CV documents from {}", self.source.describe());
        Ok(CvDocument {
            personal,
            education,
            projects,
            summary,
            courses,
        })
    }

    async fn load<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.source.fetch(path).await?;
        serde_json::from_value(value).with_context(|| format!("Unexpected structure in {}", path))
    }
}
