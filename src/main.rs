#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use cropcast::{Cli, MetadataCatalog, PredictionClient, run_app};

fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    let client = PredictionClient::new(&args.api_url).expect("Failed to build HTTP client");

    // C. Catalog Loading (Blocking) - the form must not become submittable
    // before the catalog fetch has completed or failed
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let (catalog, catalog_error) = match rt.block_on(client.fetch_metadata()) {
        Ok(catalog) => {
            log::info!(
                "Loaded catalog: {} categories, {} countries, {} seasons",
                catalog.crop_categories.len(),
                catalog.countries.len(),
                catalog.seasons.len()
            );
            (catalog, None)
        }
        Err(error) => {
            // Not fatal: the UI opens with an empty catalog and surfaces
            // the error, so the user sees what went wrong
            log::error!("Failed to load metadata catalog: {}", error);
            (MetadataCatalog::default(), Some(error))
        }
    };

    // D. Run Native App - keep the runtime alive for in-flight requests
    let handle = rt.handle().clone();
    let options = NativeOptions::default();

    eframe::run_native(
        cropcast::ui::config::UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, catalog, catalog_error, client, handle))),
    )
}
