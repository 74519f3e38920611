mod catalog;
mod ids;
mod odyssey;
mod progress;
mod record;
mod state;
mod widget_config;

pub use catalog::{
    Catalog, CatalogBuilder, CatalogError, Certification, CertificationMembership, Course,
    CourseDraft,
};
pub use ids::{CertificationKey, CourseId, TrackName};
pub use odyssey::TUTORIALS_BASE_URL;
pub use progress::{CertificationProgress, CourseProgress, TrackProgress, track_progress};
pub use record::{CourseRecord, CourseStatus, RecordIndex};
pub use state::{WidgetPhase, WidgetState};
pub use widget_config::{
    ColorConfig, ColorOverride, ConfigError, IconConfig, IconOverride, PositionConfig,
    PositionOverride, StyleConfig, StyleOverride, TextConfig, TextOverride, WidgetConfig,
    WidgetConfigOverride,
};
