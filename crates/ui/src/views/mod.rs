pub mod components;
mod widget;

#[cfg(test)]
mod render_smoke;

pub use widget::{WidgetMarkup, WidgetMarkupProps};
