// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use data::{ApiError, PredictionClient};
pub use domain::{FormState, Selection};
pub use models::{DashboardModel, MetadataCatalog, PredictionResult};
pub use ui::CropcastApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction service
    #[arg(long, env = "CROPCAST_API_URL", default_value = config::DEFAULT_BASE_URL)]
    pub api_url: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    catalog: MetadataCatalog,
    catalog_error: Option<ApiError>,
    client: PredictionClient,
    runtime: tokio::runtime::Handle,
) -> Box<dyn eframe::App> {
    let app = ui::CropcastApp::new(cc, catalog, catalog_error, client, runtime);
    Box::new(app)
}
