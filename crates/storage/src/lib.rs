#![forbid(unsafe_code)]

pub mod json_file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod repository;

pub use json_file::JsonFilePreferences;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStoragePreferences;
pub use repository::{
    InMemoryPreferences, SELECTED_TRACK_KEY, Storage, StorageError, TrackPreferenceRepository,
};
