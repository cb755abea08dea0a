use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    routing::get,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::dataset;
use crate::record::Record;

/// Environment-sourced service configuration, read once at startup.
pub struct AppConfig {
    /// Listen port (`PORT`, default 8000).
    pub port: u16,
    /// The one origin allowed by CORS (`ALLOWED_ORIGIN`).
    pub allowed_origin: String,
    /// Path of the dataset CSV (`DATASET_PATH`).
    pub dataset_path: PathBuf,
    /// Directory holding the pre-built SPA bundle (`STATIC_DIR`).
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);
        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let dataset_path = std::env::var("DATASET_PATH")
            .unwrap_or_else(|_| "data/2019-happiness-report.csv".to_string());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Self {
            port,
            allowed_origin,
            dataset_path: PathBuf::from(dataset_path),
            static_dir: PathBuf::from(static_dir),
        }
    }
}

struct AppState {
    dataset_path: PathBuf,
}

#[derive(Serialize)]
struct ErrorResponse {
    status: String,
    message: String,
}

/// Start the data service
///
/// Binds the listen port and serves the router built by [`router`] until
/// the process is stopped.
///
/// # Arguments
/// * `config` - Environment-sourced configuration
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Success or error object
pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("0.0.0.0:{}", config.port);
    let app = router(config)?;

    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router: the data route, single-origin CORS, and
/// the static SPA bundle with `index.html` fallback for unmatched routes.
pub fn router(config: AppConfig) -> Result<Router, Box<dyn std::error::Error>> {
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET]);

    // Serve the SPA bundle; any unmatched route falls back to the entry
    // document so client-side routing keeps working.
    let spa = ServeDir::new(&config.static_dir)
        .fallback(ServeFile::new(config.static_dir.join("index.html")));

    let state = Arc::new(AppState {
        dataset_path: config.dataset_path,
    });

    Ok(Router::new()
        .route("/api/data", get(get_data))
        .fallback_service(spa)
        .layer(cors)
        .with_state(state))
}

/// `GET /api/data`: re-read the dataset file and return every row as JSON.
/// A missing or unparsable file is a 500 with a JSON error payload rather
/// than a hung connection.
async fn get_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Record>>, (StatusCode, Json<ErrorResponse>)> {
    let content = tokio::fs::read_to_string(&state.dataset_path)
        .await
        .map_err(|e| internal_error(format!("failed to read dataset: {}", e)))?;

    let records = dataset::parse_records(content.lines())
        .map_err(|e| internal_error(format!("failed to parse dataset: {}", e)))?;

    log::info!("GET /api/data -> {} records", records.len());
    Ok(Json(records))
}

fn internal_error(message: String) -> (StatusCode, Json<ErrorResponse>) {
    log::error!("{}", message);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            status: "error".to_string(),
            message,
        }),
    )
}
