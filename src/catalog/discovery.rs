//! Discovery of courses living directly inside the content root.

use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Marker file a directory must carry to count as a course.
const COURSE_INFO_FILE: &str = "info.yml";

/// Source of discovered course slugs.
///
/// Implementations must return a stable ordering; the returned order
/// becomes the catalog order for discovered entries.
pub trait CourseDiscovery {
    fn list_courses(&self) -> Result<Vec<String>>;
}

/// Filesystem scan of a content root.
///
/// Self-study courses live under `courses/<name>` (slug
/// `courses/<name>`), course runs under `runs/<year>/<name>` (slug
/// `<year>/<name>`). Directories are visited in sorted order so a
/// freeze of the same tree always produces the same catalog.
#[derive(Debug, Clone)]
pub struct RootScan {
    root: PathBuf,
}

impl RootScan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn course_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() && path.join(COURSE_INFO_FILE).is_file() {
                dirs.push(path);
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    fn dir_name(path: &Path) -> Option<&str> {
        path.file_name().and_then(|name| name.to_str())
    }
}

impl CourseDiscovery for RootScan {
    fn list_courses(&self) -> Result<Vec<String>> {
        let mut slugs = Vec::new();

        let self_study_path = self.root.join("courses");
        if self_study_path.is_dir() {
            for dir in Self::course_dirs(&self_study_path)? {
                if let Some(name) = Self::dir_name(&dir) {
                    slugs.push(format!("courses/{name}"));
                }
            }
        } else {
            warn!("no courses at {}", self_study_path.display());
        }

        let run_path = self.root.join("runs");
        if run_path.is_dir() {
            let mut year_dirs = Vec::new();
            for entry in fs::read_dir(&run_path)? {
                let path = entry?.path();
                if path.is_dir() {
                    year_dirs.push(path);
                }
            }
            year_dirs.sort();
            for year_dir in year_dirs {
                let Some(year) = Self::dir_name(&year_dir).map(str::to_owned) else {
                    continue;
                };
                for dir in Self::course_dirs(&year_dir)? {
                    if let Some(name) = Self::dir_name(&dir) {
                        slugs.push(format!("{year}/{name}"));
                    }
                }
            }
        } else {
            warn!("no runs at {}", run_path.display());
        }

        debug!("discovered {} courses under {}", slugs.len(), self.root.display());
        Ok(slugs)
    }
}
