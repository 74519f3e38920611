use odyssey_core::model::{WidgetConfig, WidgetConfigOverride};
use tracing::warn;

/// Resolves the configuration handed to the embedding entry point.
///
/// Invalid JSON is logged and the built-in defaults are used instead; the
/// host page never sees an error.
#[must_use]
pub fn resolve_config(config_json: Option<&str>) -> WidgetConfig {
    let Some(json) = config_json else {
        return WidgetConfig::default();
    };
    match WidgetConfigOverride::from_json(json) {
        Ok(overrides) => overrides.resolve(),
        Err(err) => {
            warn!(%err, "ignoring invalid widget configuration");
            WidgetConfig::default()
        }
    }
}
