//! Profile data model
//!
//! A [`Profile`] is the single root aggregate: education, skills, projects,
//! work history, and links all belong to it and have no lifecycle of their
//! own. The bundled dataset lives in [`fixture`].

pub mod fixture;
mod types;

pub use fixture::sample_profile;
pub use types::{EducationEntry, LinkKind, Profile, Project, WorkEntry};
