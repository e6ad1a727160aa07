//! Folio Core Library
//!
//! This crate provides the core functionality for Folio, including:
//! - Profile data model and the compiled-in portfolio fixture
//! - `ProfileStore`, the read-only query layer over a profile
//! - Keyword search across name, skills, projects, and work history
//! - An async api shim with simulated latency and a health probe
//! - Presentation state and text rendering shared by the CLI and TUI
//! - Configuration with file persistence

pub mod api;
pub mod config;
pub mod error;
pub mod profile;
pub mod render;
pub mod search;
pub mod store;
pub mod view;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::{PortfolioApi, SimulatedApi};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::profile::{EducationEntry, Profile, Project, WorkEntry};
    pub use crate::search::SearchResult;
    pub use crate::store::{ProfileStore, SkillFilter, SkillUsage};
    pub use crate::view::{Action, AppState, View};
}
