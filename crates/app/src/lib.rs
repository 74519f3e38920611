pub mod embed;
pub mod logging;
pub mod slot;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use embed::resolve_config;
pub use slot::{MountId, WidgetSlot};
#[cfg(target_arch = "wasm32")]
pub use web::{MountError, create_widget};
