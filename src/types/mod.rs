// src/types/mod.rs
pub mod cv_data;
pub mod state;

pub use cv_data::CvDocument;
pub use state::{AppState, Lang, Theme};
