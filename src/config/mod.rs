//! Local course configuration (`courses.yml`).

pub mod loader;
pub mod types;

pub use loader::{load_declarations, COURSES_FILE};
pub use types::{CourseDeclaration, CourseRecord};
