//! Inline style strings derived from the widget configuration.
//!
//! The widget ships as a single script, so nothing here may reference an
//! external stylesheet.

use odyssey_core::model::WidgetConfig;

/// Id of the mounted container element.
pub const WIDGET_ELEMENT_ID: &str = "apollo-odyssey-tracking-widget";
/// Id of the track `<select>` inside the rendered markup.
pub const TRACK_SELECT_ID: &str = "odyssey-track-select";
/// Id of the close button inside the rendered markup.
pub const CLOSE_BUTTON_ID: &str = "odyssey-close-button";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetStyles {
    pub widget: String,
    pub container: String,
    pub completed: String,
    pub header: String,
    pub dropdown: String,
    pub group: String,
    pub cert_group: String,
    pub cert_header: String,
    pub cert_description: String,
    pub list: String,
    pub list_item: String,
    pub link: String,
    pub status_not_started: String,
    pub status_in_progress: String,
    pub status_completed: String,
    pub success_text: String,
    pub button_container: String,
    pub close_button: String,
    pub login_prompt: String,
}

impl WidgetStyles {
    #[must_use]
    pub fn from_config(config: &WidgetConfig) -> Self {
        let colors = &config.colors;
        let styles = &config.styles;

        Self {
            widget: Css::new()
                .set("position", "fixed")
                .set("top", &config.position.top)
                .set("right", &config.position.right)
                .set("background", &colors.background)
                .set("padding", &styles.padding)
                .set("border-radius", "10px")
                .set("box-shadow", "0px 4px 6px rgba(0,0,0,0.1)")
                .set("font-family", &styles.font_family)
                .set("font-size", &styles.font_size)
                .set("z-index", "9999")
                .set("width", &config.width)
                .set("border", &format!("1px solid {}", colors.border))
                .set("line-height", "1.5")
                .set("color", &colors.text)
                .build(),
            container: Css::new()
                .set("padding", &styles.padding)
                .set("border-radius", &styles.border_radius)
                .build(),
            completed: Css::new()
                .set("background", &format!("{}15", colors.success))
                .set("border", &format!("1px solid {}", colors.success))
                .build(),
            header: Css::new()
                .set("font-size", "16px")
                .set("font-weight", "bold")
                .set("margin-bottom", "10px")
                .build(),
            dropdown: Css::new()
                .set("margin", "10px 0")
                .set("padding", "8px")
                .set("border-radius", &styles.border_radius)
                .set("width", "100%")
                .set("font-size", &styles.font_size)
                .set("cursor", "pointer")
                .set("border", &format!("1px solid {}", colors.border))
                .set("background", &colors.dropdown_bg)
                .set("appearance", "auto")
                .build(),
            group: Css::new()
                .set("margin-bottom", "15px")
                .set("padding", "0 10px")
                .build(),
            cert_group: Css::new()
                .set("margin-bottom", "15px")
                .set("padding", "10px")
                .set("border", &format!("1px solid {}", colors.border))
                .set("border-radius", &styles.border_radius)
                .set("background", &colors.background)
                .build(),
            cert_header: Css::new()
                .set("margin", "0 0 10px 0")
                .set("font-size", &styles.font_size)
                .set("color", &colors.primary)
                .build(),
            cert_description: Css::new()
                .set("font-size", "12px")
                .set("color", &colors.text_muted)
                .set("margin", "5px 0")
                .build(),
            list: Css::new()
                .set("margin", "0")
                .set("padding-left", "20px")
                .set("list-style", "disc")
                .build(),
            list_item: Css::new().set("margin", "5px 0").build(),
            link: Css::new()
                .set("color", &colors.primary)
                .set("text-decoration", "none")
                .build(),
            status_not_started: Css::new().set("color", &colors.text_muted).build(),
            status_in_progress: Css::new().set("color", &colors.primary).build(),
            status_completed: Css::new().set("color", &colors.success).build(),
            success_text: Css::new().set("color", &colors.success).build(),
            button_container: Css::new()
                .set("text-align", "right")
                .set("margin-top", "15px")
                .build(),
            close_button: Css::new()
                .set("background", &colors.primary)
                .set("color", "#fff")
                .set("border", "none")
                .set("padding", "8px 15px")
                .set("border-radius", &styles.border_radius)
                .set("cursor", "pointer")
                .set("font-size", "12px")
                .build(),
            login_prompt: Css::new().set("margin-top", "10px").build(),
        }
    }

    /// Container style, with the success treatment when `completed`.
    #[must_use]
    pub fn container_for(&self, completed: bool) -> String {
        if completed {
            format!("{} {}", self.container, self.completed)
        } else {
            self.container.clone()
        }
    }

    #[must_use]
    pub fn cert_group_for(&self, completed: bool) -> String {
        if completed {
            format!("{} {}", self.cert_group, self.completed)
        } else {
            self.cert_group.clone()
        }
    }
}

/// Builds a single-line inline style declaration list.
#[derive(Default)]
struct Css(Vec<String>);

impl Css {
    fn new() -> Self {
        Self::default()
    }

    fn set(mut self, property: &str, value: &str) -> Self {
        self.0.push(format!("{property}: {value};"));
        self
    }

    fn build(self) -> String {
        self.0.join(" ")
    }
}
