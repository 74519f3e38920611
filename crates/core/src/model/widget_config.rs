use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid widget configuration: {0}")]
    Json(#[from] serde_json::Error),
}

//
// ─── RESOLVED CONFIG ───────────────────────────────────────────────────────────
//

/// Presentation settings with every value filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub width: String,
    pub position: PositionConfig,
    pub colors: ColorConfig,
    pub icons: IconConfig,
    pub text: TextConfig,
    pub styles: StyleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionConfig {
    pub top: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorConfig {
    pub primary: String,
    pub background: String,
    pub border: String,
    pub text: String,
    pub text_muted: String,
    pub success: String,
    pub dropdown_bg: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub not_started: String,
    pub in_progress: String,
    pub completed: String,
    pub certification: String,
    pub certification_in_progress: String,
    pub track: String,
    pub track_completed: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    pub title: String,
    pub not_started: String,
    pub in_progress: String,
    pub completed: String,
    pub track_completed: String,
    pub loading: String,
    pub error: String,
    pub login_prompt: String,
    pub login_link: String,
    pub close: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub font_size: String,
    pub font_family: String,
    pub border_radius: String,
    pub padding: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            width: "777px".into(),
            position: PositionConfig {
                top: "20px".into(),
                right: "20px".into(),
            },
            colors: ColorConfig {
                primary: "#007bff".into(),
                background: "#fff".into(),
                border: "#ddd".into(),
                text: "#333".into(),
                text_muted: "#666".into(),
                success: "#28a745".into(),
                dropdown_bg: "#f8f9fa".into(),
            },
            icons: IconConfig {
                not_started: "❌".into(),
                in_progress: "🔄".into(),
                completed: "✅".into(),
                certification: "🏆".into(),
                certification_in_progress: "🎯".into(),
                track: "🚀".into(),
                track_completed: "🎉".into(),
            },
            text: TextConfig {
                title: "Apollo Odyssey Course Progress".into(),
                not_started: "Not Started".into(),
                in_progress: "In Progress".into(),
                completed: "Completed!".into(),
                track_completed: "Track Completed!".into(),
                loading: "Loading...".into(),
                error: "Error fetching data".into(),
                login_prompt: "Please make sure you are logged in at".into(),
                login_link: "apollographql.com".into(),
                close: "Close".into(),
            },
            styles: StyleConfig {
                font_size: "14px".into(),
                font_family: "sans-serif".into(),
                border_radius: "5px".into(),
                padding: "15px".into(),
            },
        }
    }
}

//
// ─── OVERRIDES ─────────────────────────────────────────────────────────────────
//

/// Caller-supplied overrides. Any field left out keeps its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfigOverride {
    pub width: Option<String>,
    pub position: PositionOverride,
    pub colors: ColorOverride,
    pub icons: IconOverride,
    pub text: TextOverride,
    pub styles: StyleOverride,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionOverride {
    pub top: Option<String>,
    pub right: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorOverride {
    pub primary: Option<String>,
    pub background: Option<String>,
    pub border: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub success: Option<String>,
    pub dropdown_bg: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconOverride {
    pub not_started: Option<String>,
    pub in_progress: Option<String>,
    pub completed: Option<String>,
    pub certification: Option<String>,
    pub certification_in_progress: Option<String>,
    pub track: Option<String>,
    pub track_completed: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextOverride {
    pub title: Option<String>,
    pub not_started: Option<String>,
    pub in_progress: Option<String>,
    pub completed: Option<String>,
    pub track_completed: Option<String>,
    pub loading: Option<String>,
    pub error: Option<String>,
    pub login_prompt: Option<String>,
    pub login_link: Option<String>,
    pub close: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOverride {
    pub font_size: Option<String>,
    pub font_family: Option<String>,
    pub border_radius: Option<String>,
    pub padding: Option<String>,
}

impl WidgetConfigOverride {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from the JSON object handed over by the embedding page.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Fill every missing or blank field from the defaults.
    #[must_use]
    pub fn resolve(self) -> WidgetConfig {
        let d = WidgetConfig::default();
        WidgetConfig {
            width: pick(self.width, d.width),
            position: PositionConfig {
                top: pick(self.position.top, d.position.top),
                right: pick(self.position.right, d.position.right),
            },
            colors: ColorConfig {
                primary: pick(self.colors.primary, d.colors.primary),
                background: pick(self.colors.background, d.colors.background),
                border: pick(self.colors.border, d.colors.border),
                text: pick(self.colors.text, d.colors.text),
                text_muted: pick(self.colors.text_muted, d.colors.text_muted),
                success: pick(self.colors.success, d.colors.success),
                dropdown_bg: pick(self.colors.dropdown_bg, d.colors.dropdown_bg),
            },
            icons: IconConfig {
                not_started: pick(self.icons.not_started, d.icons.not_started),
                in_progress: pick(self.icons.in_progress, d.icons.in_progress),
                completed: pick(self.icons.completed, d.icons.completed),
                certification: pick(self.icons.certification, d.icons.certification),
                certification_in_progress: pick(
                    self.icons.certification_in_progress,
                    d.icons.certification_in_progress,
                ),
                track: pick(self.icons.track, d.icons.track),
                track_completed: pick(self.icons.track_completed, d.icons.track_completed),
            },
            text: TextConfig {
                title: pick(self.text.title, d.text.title),
                not_started: pick(self.text.not_started, d.text.not_started),
                in_progress: pick(self.text.in_progress, d.text.in_progress),
                completed: pick(self.text.completed, d.text.completed),
                track_completed: pick(self.text.track_completed, d.text.track_completed),
                loading: pick(self.text.loading, d.text.loading),
                error: pick(self.text.error, d.text.error),
                login_prompt: pick(self.text.login_prompt, d.text.login_prompt),
                login_link: pick(self.text.login_link, d.text.login_link),
                close: pick(self.text.close, d.text.close),
            },
            styles: StyleConfig {
                font_size: pick(self.styles.font_size, d.styles.font_size),
                font_family: pick(self.styles.font_family, d.styles.font_family),
                border_radius: pick(self.styles.border_radius, d.styles.border_radius),
                padding: pick(self.styles.padding, d.styles.padding),
            },
        }
    }
}

fn pick(value: Option<String>, fallback: String) -> String {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_resolves_to_defaults() {
        assert_eq!(WidgetConfigOverride::new().resolve(), WidgetConfig::default());
        assert_eq!(
            WidgetConfigOverride::from_json("  ").unwrap().resolve(),
            WidgetConfig::default()
        );
    }

    #[test]
    fn nested_override_keeps_sibling_defaults() {
        let json = r##"{"colors": {"primary": "#ff0000"}, "text": {"title": "My Progress"}}"##;
        let config = WidgetConfigOverride::from_json(json).unwrap().resolve();

        assert_eq!(config.colors.primary, "#ff0000");
        assert_eq!(config.colors.success, "#28a745");
        assert_eq!(config.text.title, "My Progress");
        assert_eq!(config.text.loading, "Loading...");
        assert_eq!(config.width, "777px");
    }

    #[test]
    fn camel_case_keys_and_unknown_keys() {
        let json = r##"{"width": "500px", "position": {"top": "0"}, "colors": {"textMuted": "#999", "dropdownBg": "#eee"}, "icons": {"trackCompleted": "*"}, "styles": {"fontSize": "12px"}, "extra": 1}"##;
        let config = WidgetConfigOverride::from_json(json).unwrap().resolve();

        assert_eq!(config.width, "500px");
        assert_eq!(config.position.top, "0");
        assert_eq!(config.position.right, "20px");
        assert_eq!(config.colors.text_muted, "#999");
        assert_eq!(config.colors.dropdown_bg, "#eee");
        assert_eq!(config.icons.track_completed, "*");
        assert_eq!(config.styles.font_size, "12px");
    }

    #[test]
    fn blank_values_fall_back() {
        let mut overrides = WidgetConfigOverride::new();
        overrides.width = Some("   ".into());
        overrides.text.close = Some(" Done ".into());
        let config = overrides.resolve();

        assert_eq!(config.width, "777px");
        assert_eq!(config.text.close, "Done");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(WidgetConfigOverride::from_json("{").is_err());
        assert!(WidgetConfigOverride::from_json(r#"{"width": 5}"#).is_err());
    }
}
