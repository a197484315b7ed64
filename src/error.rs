use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NaucseError {
    /// The same slug appears twice among course declarations, or twice
    /// in the discovered course listing.
    #[error("duplicate course slug '{slug}'")]
    DuplicateCourse { slug: String },

    /// A discovered course carries the same slug as an explicitly
    /// declared one. Declarations are never silently overwritten.
    #[error("discovered course '{slug}' collides with a declared course of the same slug")]
    CourseCollision { slug: String },

    /// A `courses.yml` record that cannot describe a course.
    #[error("invalid course declaration '{slug}': {reason}")]
    InvalidCourse { slug: String, reason: String },

    /// The course listing exists but could not be read.
    #[error("failed to read course configuration at {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The course listing is not valid YAML of the expected shape.
    #[error("failed to parse course configuration at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NaucseError>;
