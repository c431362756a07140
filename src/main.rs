use eframe::CreationContext;
use eframe::NativeOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use passform::app::PassFormApp;
use passform::settings::AppSettings;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = AppSettings::load();
    info!(
        min_length = settings.min_length,
        max_length = settings.max_length,
        "starting PassForm"
    );

    let native_options = NativeOptions::default();
    eframe::run_native(
        "PassForm",
        native_options,
        Box::new(move |_cc: &CreationContext| Ok(Box::new(PassFormApp::new(settings)))),
    )
}
