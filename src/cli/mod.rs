// Command-line boundary
pub mod commands;
pub mod output;

pub use commands::{parse_request, run_analysis, run_classify, CommandError, CommandOutput};
pub use output::{to_json_line, SpacedFormatter};

use crate::config::Settings;

/// Shared process setup: `.env`, configuration, logging
///
/// A broken configuration falls back to defaults so the command can still
/// answer with JSON.
pub fn bootstrap() -> Settings {
    dotenv::dotenv().ok();

    let (settings, config_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    crate::logging::init(&settings.logging);

    if let Some(e) = config_error {
        tracing::warn!("Failed to load configuration, using defaults: {}", e);
    }
    tracing::debug!("Model artifact: {}", settings.model.path.display());

    settings
}
