//! Merging declared and discovered courses into one catalog.

use super::{Catalog, CourseEntry, CourseSource, ExcludedCourse, ExclusionReason};
use crate::config::CourseDeclaration;
use crate::repo::{RepoReference, DEFAULT_BRANCH};
use crate::trust::TrustPolicy;
use crate::{NaucseError, Result};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, info};

/// Build one catalog from declared and discovered courses.
///
/// Declarations come first in declaration order, discovered courses
/// after in scan order. External declarations go through the trust
/// policy; the untrusted ones are recorded under
/// [`Catalog::excluded`] rather than admitted or silently dropped.
/// Any slug appearing twice aborts the whole resolution — a partial
/// catalog would hide the operator error behind it.
pub fn resolve(
    declarations: &[CourseDeclaration],
    discovered: &[String],
    trust: &TrustPolicy,
) -> Result<Catalog> {
    let mut entries: IndexMap<String, CourseEntry> = IndexMap::new();
    let mut excluded: Vec<ExcludedCourse> = Vec::new();
    let mut declared_slugs: HashSet<&str> = HashSet::new();

    for declaration in declarations {
        let slug = declaration.slug.as_str();
        if !declared_slugs.insert(slug) {
            return Err(NaucseError::DuplicateCourse {
                slug: slug.to_owned(),
            });
        }

        match &declaration.record.url {
            Some(url) => {
                let repo = RepoReference {
                    url: url.clone(),
                    branch: declaration
                        .record
                        .branch
                        .clone()
                        .unwrap_or_else(|| DEFAULT_BRANCH.to_owned()),
                    path: declaration.record.path.clone(),
                };
                if trust.is_trusted(&repo) {
                    entries.insert(
                        slug.to_owned(),
                        CourseEntry {
                            slug: slug.to_owned(),
                            source: CourseSource::Declared,
                            repo: Some(repo),
                        },
                    );
                } else {
                    debug!("untrusted repo: {}", repo.checked_url());
                    excluded.push(ExcludedCourse {
                        slug: slug.to_owned(),
                        repo,
                        reason: ExclusionReason::UntrustedRepo,
                    });
                }
            }
            None => {
                // Local declarations live inside the operator's root
                // and are exempt from the trust check.
                entries.insert(
                    slug.to_owned(),
                    CourseEntry {
                        slug: slug.to_owned(),
                        source: CourseSource::Declared,
                        repo: None,
                    },
                );
            }
        }
    }

    for slug in discovered {
        if declared_slugs.contains(slug.as_str()) {
            return Err(NaucseError::CourseCollision { slug: slug.clone() });
        }
        if entries.contains_key(slug) {
            return Err(NaucseError::DuplicateCourse { slug: slug.clone() });
        }
        entries.insert(
            slug.clone(),
            CourseEntry {
                slug: slug.clone(),
                source: CourseSource::Discovered,
                repo: None,
            },
        );
    }

    let catalog = Catalog {
        entries,
        excluded,
        has_curated_homepage: !declarations.is_empty(),
    };
    info!(
        "resolved catalog: {} courses, {} excluded",
        catalog.len(),
        catalog.excluded().len()
    );
    Ok(catalog)
}
