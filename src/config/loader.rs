use super::types::{CourseDeclaration, CourseRecord};
use crate::{NaucseError, Result};
use serde_yaml_ng::Mapping;
use std::path::Path;
use tracing::{debug, info};

/// Course listing file at the top of a content root.
pub const COURSES_FILE: &str = "courses.yml";

/// Read `<root>/courses.yml` into declarations, preserving file order.
///
/// A missing file is not an error: the homepage then falls back to
/// listing discovered courses only.
pub fn load_declarations(root: &Path) -> Result<Vec<CourseDeclaration>> {
    let path = root.join(COURSES_FILE);
    if !path.is_file() {
        debug!("no {} under {}, using discovered courses only", COURSES_FILE, root.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| NaucseError::ConfigRead {
        path: path.clone(),
        source,
    })?;
    let declarations = parse_declarations(&content, &path)?;
    info!(
        "loaded {} course declarations from {}",
        declarations.len(),
        path.display()
    );
    Ok(declarations)
}

fn parse_declarations(content: &str, path: &Path) -> Result<Vec<CourseDeclaration>> {
    // An empty file is an empty listing, not a parse error.
    let doc: Option<Mapping> =
        serde_yaml_ng::from_str(content).map_err(|source| NaucseError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    let Some(doc) = doc else {
        return Ok(Vec::new());
    };

    let mut declarations = Vec::with_capacity(doc.len());
    for (key, value) in doc {
        let slug = key
            .as_str()
            .ok_or_else(|| NaucseError::InvalidCourse {
                slug: format!("{key:?}"),
                reason: "course slug must be a string".into(),
            })?
            .to_owned();
        if slug.is_empty() {
            return Err(NaucseError::InvalidCourse {
                slug,
                reason: "course slug must not be empty".into(),
            });
        }

        let record: CourseRecord =
            serde_yaml_ng::from_value(value).map_err(|e| NaucseError::InvalidCourse {
                slug: slug.clone(),
                reason: e.to_string(),
            })?;
        if record.url.as_deref() == Some("") {
            return Err(NaucseError::InvalidCourse {
                slug,
                reason: "url must not be empty".into(),
            });
        }

        declarations.push(CourseDeclaration { slug, record });
    }
    Ok(declarations)
}
