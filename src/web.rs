use happiness_chart::app::{self, AppConfig};

/// Main entry point for the data service
///
/// Initializes logging, reads the environment-sourced configuration, and
/// runs the web server: the `/api/data` dataset route plus the static SPA
/// bundle with fallback routing.
///
/// # Environment
/// * `PORT` - listen port (default 8000)
/// * `ALLOWED_ORIGIN` - the one allowed CORS origin
/// * `DATASET_PATH` - path of the dataset CSV
/// * `STATIC_DIR` - directory of the pre-built front-end bundle
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Success or error object
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::from_env();
    app::run(config).await
}
