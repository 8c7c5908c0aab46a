pub mod config;
pub mod core;
pub mod page;
pub mod sections;
pub mod types;
pub mod utils;
pub mod web;

pub use config::AppConfig;
pub use page::{PageRenderer, PageRequest, RenderedPage};
pub use web::start_web_server;
