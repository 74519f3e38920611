#![forbid(unsafe_code)]

pub mod render;
pub mod styles;
pub mod views;
pub mod vm;

pub use render::{render_session, render_view, render_widget};
pub use styles::{CLOSE_BUTTON_ID, TRACK_SELECT_ID, WIDGET_ELEMENT_ID, WidgetStyles};
pub use vm::{WidgetVm, map_widget};
