// Digitalization Index Query System - Web Server
// REST API with Axum over the immutable in-memory dataset

use axum::{
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use dtindex::{
    year_distributions, Dataset, IndexRecord, KeywordRecord, LookupOutcome, QueryService,
    TableKind, YearDistribution,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state. The dataset is immutable after load, so a
/// plain Arc suffices - no mutex.
#[derive(Clone)]
struct AppState {
    dataset: Arc<Dataset>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message.into()),
        }
    }
}

#[derive(Deserialize)]
struct LookupParams {
    #[serde(default)]
    code: String,
    year: i32,
}

/// Rows of either raw table, tagged so clients know which columns apply.
#[derive(Serialize)]
#[serde(untagged)]
enum TableRows {
    Index(Vec<IndexRecord>),
    Keywords(Vec<KeywordRecord>),
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/summary - Dataset summary (year range + firm count)
async fn get_summary(State(state): State<AppState>) -> impl IntoResponse {
    let summary = QueryService::new(&state.dataset).summarize();
    Json(ApiResponse::ok(summary))
}

/// GET /api/years - Closed menu of valid query years
async fn get_years(State(state): State<AppState>) -> impl IntoResponse {
    let years = QueryService::new(&state.dataset).years();
    Json(ApiResponse::ok(years))
}

/// GET /api/lookup?code=X&year=Y - Single-record lookup
async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> impl IntoResponse {
    let service = QueryService::new(&state.dataset);

    match service.lookup(&params.code, params.year) {
        LookupOutcome::Found(record) => {
            (StatusCode::OK, Json(ApiResponse::ok(record))).into_response()
        }
        LookupOutcome::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(format!(
                "no record for stock code {} in {}",
                params.code, params.year
            ))),
        )
            .into_response(),
        LookupOutcome::MissingCode => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err("stock code must not be empty")),
        )
            .into_response(),
    }
}

/// GET /api/tables/:name - Full raw table (digital-index | tech-keywords)
async fn get_table(
    State(state): State<AppState>,
    AxumPath(name): AxumPath<String>,
) -> impl IntoResponse {
    match TableKind::from_name(&name) {
        Some(TableKind::DigitalIndex) => {
            let rows = TableRows::Index(state.dataset.index_records().to_vec());
            (StatusCode::OK, Json(ApiResponse::ok(rows))).into_response()
        }
        Some(TableKind::TechKeywords) => {
            let rows = TableRows::Keywords(state.dataset.keyword_records().to_vec());
            (StatusCode::OK, Json(ApiResponse::ok(rows))).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(format!("unknown table: {}", name))),
        )
            .into_response(),
    }
}

/// GET /api/distribution - Per-year five-number index summaries
async fn get_distribution(State(state): State<AppState>) -> impl IntoResponse {
    let distributions: Vec<YearDistribution> = year_distributions(&state.dataset);
    Json(ApiResponse::ok(distributions))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 Digitalization Index Query System - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let args: Vec<String> = std::env::args().collect();
    let data_dir = args
        .iter()
        .position(|a| a == "--data")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    let index_path = data_dir.join("digital_index.csv");
    let keywords_path = data_dir.join("tech_keywords.csv");

    let dataset = match Dataset::load(&index_path, &keywords_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("❌ Data load failed: {}", e);
            eprintln!("   Pass --data DIR to point at the CSV tables.");
            std::process::exit(1);
        }
    };

    println!(
        "✓ Loaded {} index records, {} keyword records (at {})",
        dataset.index_records().len(),
        dataset.keyword_records().len(),
        dataset.loaded_at().to_rfc3339()
    );

    // Create shared state
    let state = AppState {
        dataset: Arc::new(dataset),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/summary", get(get_summary))
        .route("/years", get(get_years))
        .route("/lookup", get(lookup))
        .route("/tables/:name", get(get_table))
        .route("/distribution", get(get_distribution))
        .with_state(state.clone());

    // Build main router
    let app = Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   Try: http://localhost:3000/api/summary");
    println!("        http://localhost:3000/api/lookup?code=000921&year=2020");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
