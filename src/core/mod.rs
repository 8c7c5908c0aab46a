// src/core/mod.rs
//! Rendering building blocks shared by the server and the CLI

pub mod formatters;
pub mod icons;
pub mod loader;
pub mod localization;
pub mod tabs;
pub mod template_engine;

pub use loader::{CvLoader, DataSource, DocumentSource};
pub use tabs::{TabEvent, TabManager, TabSet};
pub use template_engine::{Binding, TemplateEngine};
