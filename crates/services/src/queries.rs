use odyssey_core::model::CourseRecord;
use serde::{Deserialize, Serialize};

/// Read-only query for the signed-in user and their Odyssey course records.
pub const GET_USER_PROGRESS: &str = r"query GetUser {
  me {
    ... on User {
      ...User
      __typename
    }
    __typename
  }
}

fragment User on User {
  id
  fullName
  email
  courses: odysseyCourses {
    ...Course
    __typename
  }
  __typename
}

fragment Course on OdysseyCourse {
  id
  completedAt
  enrolledAt
  __typename
}";

#[derive(Debug, Serialize)]
pub(crate) struct GraphqlRequest<'a> {
    pub(crate) query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse {
    #[serde(default)]
    pub(crate) data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseData {
    #[serde(default)]
    pub(crate) me: Option<UserProgress>,
}

/// The `me` object of a progress response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub courses: Option<Vec<CourseRecord>>,
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,
}

impl UserProgress {
    /// Whether `me` resolved to an actual user rather than some other identity.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.id.is_some() && self.typename.as_deref().is_none_or(|name| name == "User")
    }
}
