use crate::model::catalog::Catalog;
use crate::model::ids::{CertificationKey, CourseId, TrackName};
use crate::model::record::{CourseRecord, CourseStatus, RecordIndex};

/// One course line as displayed inside a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseProgress {
    pub id: CourseId,
    pub title: String,
    pub url: String,
    pub status: CourseStatus,
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationProgress {
    pub key: CertificationKey,
    pub name: String,
    pub description: Option<String>,
    pub courses: Vec<CourseProgress>,
    pub completed: bool,
}

/// Everything the renderer needs for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackProgress {
    pub track: TrackName,
    /// Non-empty certification groups, in certification declaration order.
    pub certifications: Vec<CertificationProgress>,
    /// Track courses outside every certification subset, in catalog order.
    pub remaining: Vec<CourseProgress>,
    pub completed: bool,
}

impl TrackProgress {
    /// All course ids shown for the track, groups first.
    pub fn course_ids(&self) -> impl Iterator<Item = &CourseId> {
        self.certifications
            .iter()
            .flat_map(|cert| cert.courses.iter())
            .chain(self.remaining.iter())
            .map(|course| &course.id)
    }
}

/// Derives grouped progress for `track` from the catalog and user records.
#[must_use]
pub fn track_progress(
    catalog: &Catalog,
    track: &TrackName,
    records: &[CourseRecord],
) -> TrackProgress {
    let index = RecordIndex::new(records);
    let track_courses = catalog.courses_for_track(track.as_str());

    let certifications = catalog
        .certifications()
        .iter()
        .filter_map(|cert| {
            let subset = catalog.courses_for_certification(cert.key().as_str(), track.as_str());
            if subset.is_empty() {
                return None;
            }
            let courses: Vec<CourseProgress> = subset
                .into_iter()
                .filter_map(|id| course_progress(catalog, &index, id))
                .collect();
            let completed = courses.iter().all(|c| c.status.is_completed());
            Some(CertificationProgress {
                key: cert.key().clone(),
                name: cert.name().to_owned(),
                description: cert.description().map(str::to_owned),
                courses,
                completed,
            })
        })
        .collect();

    let certified = catalog.certified_courses_for_track(track.as_str());
    let remaining = track_courses
        .iter()
        .filter(|id| !certified.contains(*id))
        .filter_map(|id| course_progress(catalog, &index, id))
        .collect();

    let completed = track_courses.iter().all(|id| index.is_completed(id));

    TrackProgress {
        track: track.clone(),
        certifications,
        remaining,
        completed,
    }
}

fn course_progress(
    catalog: &Catalog,
    index: &RecordIndex<'_>,
    id: &CourseId,
) -> Option<CourseProgress> {
    let course = catalog.course(id.as_str())?;
    let record = index.get(id);
    Some(CourseProgress {
        id: id.clone(),
        title: course.title().to_owned(),
        url: catalog.course_url(id),
        status: CourseStatus::of(record),
        completed_at: record
            .filter(|r| r.is_completed())
            .and_then(|r| r.completed_at.clone()),
    })
}
