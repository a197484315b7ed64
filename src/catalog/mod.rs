//! The resolved course catalog exposed to the rendering layer.

pub mod discovery;
pub mod resolver;

use crate::repo::RepoReference;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Where a catalog entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseSource {
    /// Declared explicitly in `courses.yml`.
    Declared,
    /// Found by scanning the content root.
    Discovered,
}

/// A course admitted into the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CourseEntry {
    pub slug: String,
    pub source: CourseSource,
    /// Present only for externally-hosted courses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoReference>,
}

/// Why a declared course was kept out of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// `url#branch` matched no trusted-repo pattern.
    UntrustedRepo,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::UntrustedRepo => write!(f, "untrusted repository"),
        }
    }
}

/// A declared course that was evaluated and kept out.
///
/// Exclusions stay observable so an operator asking "why is my course
/// missing" gets an answer instead of a silently shorter homepage.
#[derive(Debug, Clone, Serialize)]
pub struct ExcludedCourse {
    pub slug: String,
    pub repo: RepoReference,
    pub reason: ExclusionReason,
}

/// One immutable build of the course catalog.
///
/// Rebuilt wholesale on each reload and never mutated in place, so a
/// build can be shared read-only across concurrent request handlers
/// while the next one is being assembled.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    entries: IndexMap<String, CourseEntry>,
    excluded: Vec<ExcludedCourse>,
    has_curated_homepage: bool,
}

impl Catalog {
    pub fn get(&self, slug: &str) -> Option<&CourseEntry> {
        self.entries.get(slug)
    }

    /// Entries in catalog order: declared courses first in declaration
    /// order, then discovered courses in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &CourseEntry> {
        self.entries.values()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared courses that failed the trusted-repo check.
    pub fn excluded(&self) -> &[ExcludedCourse] {
        &self.excluded
    }

    /// True when `courses.yml` declared at least one course; the
    /// homepage then presents the curated listing instead of every
    /// discovered course.
    pub fn has_curated_homepage(&self) -> bool {
        self.has_curated_homepage
    }

    /// Entries grouped by run year, for slugs shaped `YYYY/name`.
    pub fn run_years(&self) -> BTreeMap<u16, Vec<&CourseEntry>> {
        let mut years: BTreeMap<u16, Vec<&CourseEntry>> = BTreeMap::new();
        for entry in self.entries.values() {
            if let Some((prefix, _)) = entry.slug.split_once('/') {
                if let Ok(year) = prefix.parse::<u16>() {
                    years.entry(year).or_default().push(entry);
                }
            }
        }
        years
    }
}
