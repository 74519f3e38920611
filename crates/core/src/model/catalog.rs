use std::collections::HashSet;
use std::num::NonZeroU32;
use std::sync::LazyLock;

use thiserror::Error;
use url::Url;

use crate::model::ids::{CertificationKey, CourseId, TrackName};
use crate::model::odyssey;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one course")]
    Empty,

    #[error("course {0} is not assigned to any track")]
    NoTracks(CourseId),

    #[error("course {0} is declared more than once")]
    DuplicateCourse(CourseId),

    #[error("certification {0} is declared more than once")]
    DuplicateCertification(CertificationKey),

    #[error("course {course} references unknown certification {certification}")]
    UnknownCertification {
        course: CourseId,
        certification: CertificationKey,
    },

    #[error("course {0} has a certification ordinal of zero")]
    InvalidOrdinal(CourseId),

    #[error("invalid tutorials base URL: {0}")]
    InvalidBaseUrl(String),
}

//
// ─── CATALOG TYPES ─────────────────────────────────────────────────────────────
//

/// A course's place inside a certification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationMembership {
    key: CertificationKey,
    order: Option<NonZeroU32>,
}

impl CertificationMembership {
    #[must_use]
    pub fn key(&self) -> &CertificationKey {
        &self.key
    }

    #[must_use]
    pub fn order(&self) -> Option<NonZeroU32> {
        self.order
    }

    /// Sort key used for display ordering; a missing ordinal sorts first.
    #[must_use]
    pub fn sort_key(&self) -> u32 {
        self.order.map_or(0, NonZeroU32::get)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    tracks: Vec<TrackName>,
    certification: Option<CertificationMembership>,
}

impl Course {
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tracks(&self) -> &[TrackName] {
        &self.tracks
    }

    #[must_use]
    pub fn certification(&self) -> Option<&CertificationMembership> {
        self.certification.as_ref()
    }

    #[must_use]
    pub fn in_track(&self, track: &str) -> bool {
        self.tracks.iter().any(|t| t.as_str() == track)
    }

    #[must_use]
    pub fn in_certification(&self, key: &str) -> bool {
        self.certification
            .as_ref()
            .is_some_and(|m| m.key.as_str() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    key: CertificationKey,
    name: String,
    description: Option<String>,
}

impl Certification {
    #[must_use]
    pub fn key(&self) -> &CertificationKey {
        &self.key
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Static course table: courses in declaration order plus the certifications
/// they can belong to.
///
/// Tracks are never declared; they are derived from course memberships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
    certifications: Vec<Certification>,
    tutorials_base_url: String,
}

static ODYSSEY: LazyLock<Catalog> = LazyLock::new(|| {
    odyssey::builder()
        .build()
        .expect("built-in odyssey catalog should be valid")
});

impl Catalog {
    /// The built-in Apollo Odyssey catalog.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table fails validation, which the tests rule out.
    #[must_use]
    pub fn odyssey() -> &'static Catalog {
        &ODYSSEY
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id.as_str() == id)
    }

    /// Union of all course track memberships, in order of first appearance.
    #[must_use]
    pub fn tracks(&self) -> Vec<TrackName> {
        let mut seen = HashSet::new();
        self.courses
            .iter()
            .flat_map(|c| c.tracks.iter())
            .filter(|t| seen.insert(t.as_str()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn has_track(&self, track: &str) -> bool {
        self.courses.iter().any(|c| c.in_track(track))
    }

    /// Returns the stored track when it still exists, otherwise the first
    /// derived track.
    #[must_use]
    pub fn resolve_track(&self, stored: Option<&str>) -> TrackName {
        match stored.map(str::trim) {
            Some(track) if self.has_track(track) => TrackName::new(track),
            _ => self.first_track(),
        }
    }

    fn first_track(&self) -> TrackName {
        // `build` rejects empty catalogs and courses without tracks.
        self.courses
            .first()
            .and_then(|c| c.tracks.first())
            .cloned()
            .unwrap_or_else(|| TrackName::new(""))
    }

    /// Courses assigned to `track`, in catalog order.
    #[must_use]
    pub fn courses_for_track(&self, track: &str) -> Vec<&CourseId> {
        self.courses
            .iter()
            .filter(|c| c.in_track(track))
            .map(|c| &c.id)
            .collect()
    }

    /// Courses in both `certification` and `track`, ordered by certification
    /// ordinal. Ties keep catalog order.
    #[must_use]
    pub fn courses_for_certification(&self, certification: &str, track: &str) -> Vec<&CourseId> {
        let mut matching: Vec<&Course> = self
            .courses
            .iter()
            .filter(|c| c.in_certification(certification) && c.in_track(track))
            .collect();
        matching.sort_by_key(|c| c.certification.as_ref().map_or(0, |m| m.sort_key()));
        matching.into_iter().map(|c| &c.id).collect()
    }

    /// Every course of `track` that belongs to some certification's subset.
    #[must_use]
    pub fn certified_courses_for_track(&self, track: &str) -> HashSet<&CourseId> {
        self.certifications
            .iter()
            .flat_map(|cert| self.courses_for_certification(cert.key.as_str(), track))
            .collect()
    }

    /// Canonical tutorial URL; the `/v2` version suffix is not part of it.
    #[must_use]
    pub fn course_url(&self, id: &CourseId) -> String {
        format!(
            "{}{}",
            self.tutorials_base_url,
            id.as_str().replacen("/v2", "", 1)
        )
    }

    #[must_use]
    pub fn tutorials_base_url(&self) -> &str {
        &self.tutorials_base_url
    }
}

//
// ─── BUILDER ───────────────────────────────────────────────────────────────────
//

/// Unvalidated course entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub id: String,
    pub title: String,
    pub tracks: Vec<String>,
    pub certification: Option<(String, Option<u32>)>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    tutorials_base_url: String,
    certifications: Vec<(String, String, Option<String>)>,
    courses: Vec<CourseDraft>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new(tutorials_base_url: impl Into<String>) -> Self {
        Self {
            tutorials_base_url: tutorials_base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn certification(
        mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        description: Option<&str>,
    ) -> Self {
        self.certifications
            .push((key.into(), name.into(), description.map(str::to_owned)));
        self
    }

    #[must_use]
    pub fn course(self, id: &str, title: &str, tracks: &[&str]) -> Self {
        self.add_course(CourseDraft {
            id: id.to_owned(),
            title: title.to_owned(),
            tracks: tracks.iter().map(|t| (*t).to_owned()).collect(),
            certification: None,
        })
    }

    #[must_use]
    pub fn certified_course(
        self,
        id: &str,
        title: &str,
        tracks: &[&str],
        certification: &str,
        order: u32,
    ) -> Self {
        self.add_course(CourseDraft {
            id: id.to_owned(),
            title: title.to_owned(),
            tracks: tracks.iter().map(|t| (*t).to_owned()).collect(),
            certification: Some((certification.to_owned(), Some(order))),
        })
    }

    #[must_use]
    pub fn add_course(mut self, draft: CourseDraft) -> Self {
        self.courses.push(draft);
        self
    }

    /// Validate the table and produce an immutable catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the table is empty, a course has no track,
    /// ids repeat, a certification reference is dangling, an ordinal is zero,
    /// or the tutorials base URL does not parse.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        if Url::parse(&self.tutorials_base_url).is_err() {
            return Err(CatalogError::InvalidBaseUrl(self.tutorials_base_url));
        }
        if self.courses.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut certifications: Vec<Certification> = Vec::with_capacity(self.certifications.len());
        for (key, name, description) in self.certifications {
            if certifications.iter().any(|c| c.key.as_str() == key) {
                return Err(CatalogError::DuplicateCertification(CertificationKey::new(
                    key,
                )));
            }
            certifications.push(Certification {
                key: CertificationKey::new(key),
                name,
                description: description.filter(|d| !d.trim().is_empty()),
            });
        }

        let mut seen_ids = HashSet::new();
        let mut courses = Vec::with_capacity(self.courses.len());
        for draft in self.courses {
            let id = CourseId::new(draft.id);
            if !seen_ids.insert(id.clone()) {
                return Err(CatalogError::DuplicateCourse(id));
            }

            let mut tracks: Vec<TrackName> = Vec::with_capacity(draft.tracks.len());
            for track in draft.tracks {
                let track = track.trim();
                if !track.is_empty() && !tracks.iter().any(|t| t.as_str() == track) {
                    tracks.push(TrackName::new(track));
                }
            }
            if tracks.is_empty() {
                return Err(CatalogError::NoTracks(id));
            }

            let certification = match draft.certification {
                None => None,
                Some((key, order)) => {
                    if !certifications.iter().any(|c| c.key.as_str() == key) {
                        return Err(CatalogError::UnknownCertification {
                            course: id,
                            certification: CertificationKey::new(key),
                        });
                    }
                    let order = match order {
                        None => None,
                        Some(raw) => match NonZeroU32::new(raw) {
                            Some(order) => Some(order),
                            None => return Err(CatalogError::InvalidOrdinal(id)),
                        },
                    };
                    Some(CertificationMembership {
                        key: CertificationKey::new(key),
                        order,
                    })
                }
            };

            courses.push(Course {
                id,
                title: draft.title,
                tracks,
                certification,
            });
        }

        Ok(Catalog {
            courses,
            certifications,
            tutorials_base_url: self.tutorials_base_url,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: Vec<&CourseId>) -> Vec<&str> {
        list.into_iter().map(CourseId::as_str).collect()
    }

    fn small_catalog() -> Catalog {
        CatalogBuilder::new("https://example.com/tutorials/")
            .certification("Associate", "Associate Developer", Some("Finish all"))
            .certification("Pro", "Pro Developer", None)
            .certified_course("b/v2", "B", &["Everyone"], "Associate", 2)
            .course("loose", "Loose", &["Everyone", "Advanced"])
            .certified_course("a/v2", "A", &["Everyone"], "Associate", 1)
            .certified_course("p1", "P1", &["Advanced"], "Pro", 1)
            .certified_course("shared", "Shared", &["Everyone", "Advanced"], "Pro", 2)
            .build()
            .unwrap()
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::odyssey();
        assert_eq!(catalog.courses().len(), 24);
        assert_eq!(catalog.certifications().len(), 2);
        assert_eq!(
            catalog.tracks(),
            vec![
                TrackName::new("Everyone"),
                TrackName::new("Advanced"),
                TrackName::new("Android"),
                TrackName::new("Backend"),
                TrackName::new("Frontend"),
                TrackName::new("iOS"),
            ]
        );
    }

    #[test]
    fn courses_for_track_keeps_catalog_order() {
        let catalog = small_catalog();
        assert_eq!(
            ids(catalog.courses_for_track("Everyone")),
            vec!["b/v2", "loose", "a/v2", "shared"]
        );
        assert_eq!(
            ids(catalog.courses_for_track("Advanced")),
            vec!["loose", "p1", "shared"]
        );
    }

    #[test]
    fn courses_for_track_matches_membership_for_every_track() {
        let catalog = Catalog::odyssey();
        for track in catalog.tracks() {
            let expected: Vec<&CourseId> = catalog
                .courses()
                .iter()
                .filter(|c| c.tracks().contains(&track))
                .map(Course::id)
                .collect();
            assert_eq!(catalog.courses_for_track(track.as_str()), expected);
        }
    }

    #[test]
    fn certification_courses_sorted_by_ordinal_and_filtered_by_track() {
        let catalog = small_catalog();
        assert_eq!(
            ids(catalog.courses_for_certification("Associate", "Everyone")),
            vec!["a/v2", "b/v2"]
        );
        assert_eq!(
            ids(catalog.courses_for_certification("Pro", "Everyone")),
            vec!["shared"]
        );
        assert_eq!(
            ids(catalog.courses_for_certification("Pro", "Advanced")),
            vec!["p1", "shared"]
        );
        assert!(catalog.courses_for_certification("Associate", "Advanced").is_empty());
    }

    #[test]
    fn certification_subsets_stay_inside_track() {
        let catalog = Catalog::odyssey();
        for track in catalog.tracks() {
            let track_courses = catalog.courses_for_track(track.as_str());
            for cert in catalog.certifications() {
                let subset = catalog.courses_for_certification(cert.key().as_str(), track.as_str());
                let orders: Vec<u32> = subset
                    .iter()
                    .map(|id| {
                        let course = catalog.course(id.as_str()).unwrap();
                        assert!(course.in_track(track.as_str()));
                        assert!(course.in_certification(cert.key().as_str()));
                        course.certification().unwrap().sort_key()
                    })
                    .collect();
                assert!(orders.windows(2).all(|w| w[0] <= w[1]));
                assert!(subset.iter().all(|id| track_courses.contains(id)));
            }
        }
    }

    #[test]
    fn missing_ordinal_sorts_first_and_ties_keep_catalog_order() {
        let catalog = CatalogBuilder::new("https://example.com/")
            .certification("C", "Cert", None)
            .certified_course("x", "X", &["T"], "C", 2)
            .certified_course("y", "Y", &["T"], "C", 2)
            .add_course(CourseDraft {
                id: "z".into(),
                title: "Z".into(),
                tracks: vec!["T".into()],
                certification: Some(("C".into(), None)),
            })
            .certified_course("w", "W", &["T"], "C", 1)
            .build()
            .unwrap();

        assert_eq!(
            ids(catalog.courses_for_certification("C", "T")),
            vec!["z", "w", "x", "y"]
        );
    }

    #[test]
    fn unknown_names_yield_empty_results() {
        let catalog = small_catalog();
        assert!(catalog.courses_for_track("Nope").is_empty());
        assert!(catalog.courses_for_certification("Nope", "Everyone").is_empty());
        assert!(catalog.courses_for_certification("Associate", "Nope").is_empty());
    }

    #[test]
    fn resolve_track_falls_back_to_first_track() {
        let catalog = small_catalog();
        assert_eq!(catalog.resolve_track(Some("Advanced")), "Advanced");
        assert_eq!(catalog.resolve_track(Some("Removed")), "Everyone");
        assert_eq!(catalog.resolve_track(Some("")), "Everyone");
        assert_eq!(catalog.resolve_track(None), "Everyone");
    }

    #[test]
    fn course_url_strips_version_suffix() {
        let catalog = Catalog::odyssey();
        assert_eq!(
            catalog.course_url(&CourseId::new("lift-off-part1/v2")),
            "https://www.apollographql.com/tutorials/lift-off-part1"
        );
        assert_eq!(
            catalog.course_url(&CourseId::new("voyage-part1")),
            "https://www.apollographql.com/tutorials/voyage-part1"
        );
    }

    #[test]
    fn build_rejects_course_without_tracks() {
        let err = CatalogBuilder::new("https://example.com/")
            .course("x", "X", &[" "])
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::NoTracks(CourseId::new("x")));
    }

    #[test]
    fn build_rejects_duplicates_and_dangling_certifications() {
        let dup = CatalogBuilder::new("https://example.com/")
            .course("x", "X", &["T"])
            .course("x", "X again", &["T"])
            .build()
            .unwrap_err();
        assert!(matches!(dup, CatalogError::DuplicateCourse(_)));

        let dangling = CatalogBuilder::new("https://example.com/")
            .certified_course("x", "X", &["T"], "Ghost", 1)
            .build()
            .unwrap_err();
        assert!(matches!(dangling, CatalogError::UnknownCertification { .. }));

        let zero = CatalogBuilder::new("https://example.com/")
            .certification("C", "Cert", None)
            .certified_course("x", "X", &["T"], "C", 0)
            .build()
            .unwrap_err();
        assert_eq!(zero, CatalogError::InvalidOrdinal(CourseId::new("x")));
    }

    #[test]
    fn build_rejects_empty_catalog_and_bad_url() {
        assert_eq!(
            CatalogBuilder::new("https://example.com/").build().unwrap_err(),
            CatalogError::Empty
        );
        assert!(matches!(
            CatalogBuilder::new("not a url")
                .course("x", "X", &["T"])
                .build()
                .unwrap_err(),
            CatalogError::InvalidBaseUrl(_)
        ));
    }

    #[test]
    fn duplicate_track_memberships_collapse() {
        let catalog = CatalogBuilder::new("https://example.com/")
            .course("x", "X", &["T", "T", "U"])
            .build()
            .unwrap();
        assert_eq!(catalog.courses()[0].tracks().len(), 2);
    }
}
