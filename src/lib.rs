//! Course catalog core for a naucse content root.
//!
//! A content root holds locally-authored courses plus a `courses.yml`
//! listing that may point at external repositories. This crate resolves
//! that root into one immutable catalog per build: external sources are
//! admitted only when they match the operator's trusted-repo patterns,
//! and a course kept out of the catalog leaves an observable record of
//! why, instead of silently disappearing from the site.

pub mod catalog;
pub mod config;
pub mod error;
pub mod repo;
pub mod settings;
pub mod trust;

pub use error::{NaucseError, Result};
