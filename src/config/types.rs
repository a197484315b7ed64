use serde::Deserialize;

/// One record in `courses.yml`.
///
/// A record with a `url` declares a course hosted in an external
/// repository, subject to the trusted-repo check. A record without one
/// names a course living directly inside the content root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseRecord {
    #[serde(default)]
    pub url: Option<String>,

    /// Branch to render from; [`crate::repo::DEFAULT_BRANCH`] when
    /// absent.
    #[serde(default)]
    pub branch: Option<String>,

    /// Subdirectory within the branch holding compiled output.
    #[serde(default)]
    pub path: Option<String>,
}

/// A `courses.yml` entry, kept in file order.
#[derive(Debug, Clone)]
pub struct CourseDeclaration {
    pub slug: String,
    pub record: CourseRecord,
}

impl CourseDeclaration {
    pub fn new(slug: impl Into<String>, record: CourseRecord) -> Self {
        Self {
            slug: slug.into(),
            record,
        }
    }

    /// Whether this declaration points at an external repository.
    pub fn is_external(&self) -> bool {
        self.record.url.is_some()
    }
}
