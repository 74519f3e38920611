use odyssey_core::model::{
    Catalog, CertificationProgress, CourseProgress, CourseStatus, WidgetConfig, WidgetPhase,
    WidgetState, track_progress,
};

use crate::styles::WidgetStyles;
use crate::vm::time_fmt::completed_tooltip;

/// Everything the widget markup needs, already resolved to display strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetVm {
    Loading(LoadingVm),
    LoginPrompt(LoginPromptVm),
    Progress(TrackVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingVm {
    pub label: String,
    pub styles: WidgetStyles,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginPromptVm {
    pub headline: String,
    pub prompt: String,
    pub link_text: String,
    pub link_url: String,
    pub styles: WidgetStyles,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackVm {
    pub heading: String,
    /// Label shown next to the heading once every track course is done.
    pub completed_label: Option<String>,
    pub completed: bool,
    pub tracks: Vec<TrackOptionVm>,
    pub groups: Vec<CertificationGroupVm>,
    pub remaining: Vec<CourseRowVm>,
    pub close_label: String,
    pub styles: WidgetStyles,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackOptionVm {
    pub name: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificationGroupVm {
    pub heading: String,
    pub completed_label: Option<String>,
    pub description: Option<String>,
    pub courses: Vec<CourseRowVm>,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseRowVm {
    pub title: String,
    pub url: String,
    pub status_text: String,
    pub status_style: String,
    pub tooltip: Option<String>,
}

#[must_use]
pub fn map_widget(catalog: &Catalog, config: &WidgetConfig, state: &WidgetState) -> WidgetVm {
    let styles = WidgetStyles::from_config(config);
    match state.phase() {
        WidgetPhase::Loading => WidgetVm::Loading(LoadingVm {
            label: format!("{} {}", config.icons.track, config.text.loading),
            styles,
        }),
        WidgetPhase::Failed => WidgetVm::LoginPrompt(LoginPromptVm {
            headline: format!("{} {}", config.icons.not_started, config.text.error),
            prompt: config.text.login_prompt.clone(),
            link_text: config.text.login_link.clone(),
            link_url: catalog.tutorials_base_url().to_string(),
            styles,
        }),
        WidgetPhase::Ready => WidgetVm::Progress(map_track(catalog, config, state, styles)),
    }
}

fn map_track(
    catalog: &Catalog,
    config: &WidgetConfig,
    state: &WidgetState,
    styles: WidgetStyles,
) -> TrackVm {
    let selected = state.selected_track();
    let progress = track_progress(catalog, selected, state.records());

    let icon = if progress.completed {
        &config.icons.track_completed
    } else {
        &config.icons.track
    };

    let tracks = catalog
        .tracks()
        .into_iter()
        .map(|track| TrackOptionVm {
            selected: track == *selected,
            name: track.as_str().to_owned(),
        })
        .collect();

    let groups = progress
        .certifications
        .iter()
        .map(|cert| map_certification(cert, config, &styles))
        .collect();

    let remaining = progress
        .remaining
        .iter()
        .map(|course| map_course(course, config, &styles))
        .collect();

    TrackVm {
        heading: format!("{icon} {}", config.text.title),
        completed_label: progress
            .completed
            .then(|| format!("({})", config.text.track_completed)),
        completed: progress.completed,
        tracks,
        groups,
        remaining,
        close_label: config.text.close.clone(),
        styles,
    }
}

fn map_certification(
    cert: &CertificationProgress,
    config: &WidgetConfig,
    styles: &WidgetStyles,
) -> CertificationGroupVm {
    let icon = if cert.completed {
        &config.icons.certification
    } else {
        &config.icons.certification_in_progress
    };
    CertificationGroupVm {
        heading: format!("{icon} {}", cert.name),
        completed_label: cert
            .completed
            .then(|| format!("({})", config.text.completed)),
        description: cert.description.clone(),
        courses: cert
            .courses
            .iter()
            .map(|course| map_course(course, config, styles))
            .collect(),
        completed: cert.completed,
    }
}

fn map_course(
    course: &CourseProgress,
    config: &WidgetConfig,
    styles: &WidgetStyles,
) -> CourseRowVm {
    let (icon, label, status_style) = match course.status {
        CourseStatus::NotStarted => (
            &config.icons.not_started,
            &config.text.not_started,
            &styles.status_not_started,
        ),
        CourseStatus::InProgress => (
            &config.icons.in_progress,
            &config.text.in_progress,
            &styles.status_in_progress,
        ),
        CourseStatus::Completed => (
            &config.icons.completed,
            &config.text.completed,
            &styles.status_completed,
        ),
    };

    CourseRowVm {
        title: course.title.clone(),
        url: course.url.clone(),
        status_text: format!("{icon} {label}"),
        status_style: status_style.clone(),
        tooltip: course
            .completed_at
            .as_deref()
            .filter(|_| course.status.is_completed())
            .map(completed_tooltip),
    }
}
