mod time_fmt;
mod widget_vm;

pub use time_fmt::{completed_tooltip, format_date};
pub use widget_vm::{
    CertificationGroupVm, CourseRowVm, LoadingVm, LoginPromptVm, TrackOptionVm, TrackVm,
    WidgetVm, map_widget,
};
