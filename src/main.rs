use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cv_portfolio::core::template_engine::TemplateEngine;
use cv_portfolio::core::loader::DOCUMENTS;
use cv_portfolio::core::{CvLoader, DocumentSource};
use cv_portfolio::types::{AppState, Theme};
use cv_portfolio::utils::normalize_language;
use cv_portfolio::{start_web_server, AppConfig, PageRenderer, PageRequest};
use std::path::PathBuf;
use tracing::{info, warn};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[derive(Parser)]
#[command(name = "cvfolio")]
#[command(about = "Bilingual CV portfolio server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the portfolio over HTTP (default)
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Render one page view to a file or stdout
    Render {
        #[arg(long, default_value = "en")]
        lang: String,
        #[arg(long, default_value = "dark")]
        theme: String,
        #[arg(long)]
        tab: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load every CV document and report
    Check,
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(
        "cvfolio=INFO,cv_portfolio=INFO,rocket::server=OFF",
    ));
    let registry = Registry::default().with(filter);

    if json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = AppConfig::load()?;

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            let config = AppConfig {
                port: port.unwrap_or(config.port),
                ..config
            };
            start_web_server(config).await
        }
        Command::Render {
            lang,
            theme,
            tab,
            out,
        } => render_page(config, &lang, &theme, tab, out).await,
        Command::Check => check_documents(config).await,
    }
}

async fn render_page(
    config: AppConfig,
    lang: &str,
    theme: &str,
    tab: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let templates = TemplateEngine::load(&config.templates_path)?;
    let renderer = PageRenderer::new(config.data_source()?, templates)?;

    let state = AppState::today(normalize_language(Some(lang)), Theme::from_preference(Some(theme)));
    let request = PageRequest {
        fragment: tab,
        ..Default::default()
    };
    let page = renderer.render(&state, &request).await;
    if !page.loaded {
        warn!("CV data could not be loaded, page shows the error panel");
    }

    match out {
        Some(path) => {
            tokio::fs::write(&path, &page.html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Rendered {} page ({} tab) to {}",
                state.lang,
                page.active_tab.as_deref().unwrap_or("no"),
                path.display()
            );
        }
        None => println!("{}", page.html),
    }

    Ok(())
}

async fn check_documents(config: AppConfig) -> Result<()> {
    let source = config.data_source()?;
    let origin = source.describe();
    let loader = CvLoader::new(source);

    let document = loader
        .load_all()
        .await
        .with_context(|| format!("CV data check failed for {}", origin))?;

    let projects = document
        .projects
        .software_projects
        .as_ref()
        .map_or(0, Vec::len);
    let certifications = document
        .courses
        .certifications
        .as_ref()
        .map_or(0, Vec::len);

    info!("✓ All CV documents loaded from {}", origin);
    info!("  Documents: {}", DOCUMENTS.join(", "));
    info!("  Projects: {}", projects);
    info!("  Certifications: {}", certifications);
    Ok(())
}
