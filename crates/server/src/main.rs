//! Lodestar Server
//!
//! Axum server and CLI over the reference-architecture index and the agent
//! sample search. Orchestrators call `/api/v1/references` once per design
//! request; the CLI runs the same queries in-process.

mod api;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use clap::{Parser, Subcommand};
use lodestar_core::catalog::{MatchMode, ReferenceArchitectureIndex};
use lodestar_core::config::{LodestarConfig, DEFAULT_CONFIG_PATH};
use lodestar_core::ranking::SearchKind;
use lodestar_core::samples::{github_searcher, GitHubSource, SampleSearcher};
use lodestar_core::Catalog;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use utoipa::OpenApi;

/// Application state, built once at startup and shared read-only
pub struct AppState {
    index: ReferenceArchitectureIndex,
    samples: SampleSearcher<GitHubSource>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    fn from_config(config: &LodestarConfig) -> Result<Self> {
        let index =
            ReferenceArchitectureIndex::with_weights(Catalog::builtin(), config.scoring.clone());
        let samples = github_searcher(config).context("Failed to create GitHub sample client")?;
        Ok(Self { index, samples })
    }
}

#[derive(Parser, Clone)]
#[command(author, version, about = "Lodestar - Reference architectures for multi-agent designs")]
struct Args {
    /// Path to the JSON config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the Lodestar server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
    /// Find reference architectures for a problem description
    Query {
        /// Free-text problem description
        description: String,
        /// keyword or weighted
        #[arg(short, long, default_value = "keyword")]
        mode: MatchMode,
    },
    /// Print the reference catalog
    Catalog,
    /// Search agent samples on GitHub
    Samples {
        /// Search terms
        query: String,
        /// architecture, code, documentation or general
        #[arg(short, long, default_value = "architecture")]
        kind: SearchKind,
    },
}

// === OpenAPI Definition ===

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lodestar API",
        version = "1.0.0",
        description = "Reference-architecture lookup and agent sample search for multi-agent design pipelines"
    ),
    paths(
        api::references::find_references,
        api::references::list_catalog,
        api::references::get_schema,
        api::samples::search_samples,
        api::quality::assess
    ),
    components(
        schemas(
            api::references::ReferencesRequest,
            api::references::ReferencesResponse,
            api::references::CatalogResponse,
            api::samples::SampleSearchRequest,
            api::quality::QualityRequest,
            api::quality::QualityResponse
        )
    ),
    tags(
        (name = "references", description = "Reference architecture catalog"),
        (name = "samples", description = "GitHub agent sample search"),
        (name = "quality", description = "Documentation answer assessment")
    )
)]
struct ApiDoc;

async fn serve_openapi() -> impl IntoResponse {
    let spec = ApiDoc::openapi().to_json().unwrap_or_default();
    (
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(spec),
    )
}

/// Agent card so orchestrators can discover the lookup skills
async fn serve_agent_card() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Lodestar",
        "description": "Finds known multi-agent architectures and public agent samples that resemble a design request.",
        "version": env!("CARGO_PKG_VERSION"),
        "capabilities": {
            "streaming": false,
            "pushNotifications": false,
            "stateTransitionHistory": false
        },
        "skills": [
            {
                "id": "find-references",
                "name": "Reference Architectures",
                "description": "Returns catalog architectures whose use cases appear in a problem description, or a generic fallback.",
                "tags": ["architecture", "retrieval", "design"],
                "inputModes": ["text/plain", "application/json"],
                "outputModes": ["application/json"]
            },
            {
                "id": "search-samples",
                "name": "Agent Sample Search",
                "description": "Ranks public agent samples against a query and infers their architecture patterns.",
                "tags": ["search", "samples", "github"],
                "inputModes": ["text/plain", "application/json"],
                "outputModes": ["application/json"]
            }
        ]
    }))
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .nest("/api/v1/references", api::reference_routes())
        .nest("/api/v1/catalog", api::catalog_routes())
        .nest("/api/v1/samples", api::sample_routes())
        .nest("/api/v1/quality", api::quality_routes())
        .route("/api/v1/openapi.json", get(serve_openapi))
        .route("/.well-known/agent-card.json", get(serve_agent_card))
        .with_state(state)
}

async fn run_server(config: &LodestarConfig, port: u16) -> Result<()> {
    let state: SharedState = Arc::new(AppState::from_config(config)?);
    tracing::info!(
        entries = state.index.catalog().len(),
        repository = %config.github.repository,
        "Lodestar state ready"
    );

    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Lodestar server running at http://{}", addr);
    tracing::info!("   References: POST /api/v1/references");
    tracing::info!("   Catalog:    GET  /api/v1/catalog, /api/v1/catalog/schema");
    tracing::info!("   Samples:    POST /api/v1/samples/search");
    tracing::info!("   Quality:    POST /api/v1/quality");

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GITHUB_TOKEN and friends from a local .env
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let config = LodestarConfig::load(&args.config).await?;

    match args.command {
        Some(CliCommand::Serve { port }) => run_server(&config, port).await,
        None => run_server(&config, 8080).await,
        Some(CliCommand::Query { description, mode }) => {
            let index = ReferenceArchitectureIndex::with_weights(
                Catalog::builtin(),
                config.scoring.clone(),
            );
            print_json(&index.query(&description, mode))
        }
        Some(CliCommand::Catalog) => print_json(&Catalog::builtin()),
        Some(CliCommand::Samples { query, kind }) => {
            let searcher = github_searcher(&config).context("Failed to create GitHub sample client")?;
            print_json(&searcher.search(&query, kind).await)
        }
    }
}
