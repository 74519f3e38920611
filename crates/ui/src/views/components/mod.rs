mod certification_group;
mod controls;
mod course_list;

pub use certification_group::CertificationGroup;
pub use controls::{CloseButton, TrackSelector};
pub use course_list::CourseList;
