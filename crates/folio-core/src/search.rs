//! Keyword search across a profile
//!
//! Matching is case-insensitive substring containment. Results are grouped
//! by origin in a fixed order (profile, skills, projects, work) and each
//! group keeps the profile's authored order. There is no ranking and no
//! deduplication across groups.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::Profile;

/// Origin of a search hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResultKind {
    Profile,
    Skill,
    Project,
    Work,
}

impl SearchResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Skill => "skill",
            Self::Project => "project",
            Self::Work => "work",
        }
    }
}

impl fmt::Display for SearchResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single search hit, tagged by origin
///
/// `highlight` names the text a presenter should emphasize. Only project
/// hits carry the project's skill tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchResult {
    Profile {
        title: String,
        content: String,
        highlight: String,
    },
    Skill {
        title: String,
        content: String,
        highlight: String,
    },
    Project {
        title: String,
        content: String,
        highlight: String,
        skills: Vec<String>,
    },
    Work {
        title: String,
        content: String,
        highlight: String,
    },
}

impl SearchResult {
    pub fn kind(&self) -> SearchResultKind {
        match self {
            Self::Profile { .. } => SearchResultKind::Profile,
            Self::Skill { .. } => SearchResultKind::Skill,
            Self::Project { .. } => SearchResultKind::Project,
            Self::Work { .. } => SearchResultKind::Work,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Profile { title, .. }
            | Self::Skill { title, .. }
            | Self::Project { title, .. }
            | Self::Work { title, .. } => title,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Profile { content, .. }
            | Self::Skill { content, .. }
            | Self::Project { content, .. }
            | Self::Work { content, .. } => content,
        }
    }

    pub fn highlight(&self) -> &str {
        match self {
            Self::Profile { highlight, .. }
            | Self::Skill { highlight, .. }
            | Self::Project { highlight, .. }
            | Self::Work { highlight, .. } => highlight,
        }
    }

    /// Skill tags attached to project hits
    pub fn skills(&self) -> Option<&[String]> {
        match self {
            Self::Project { skills, .. } => Some(skills),
            _ => None,
        }
    }
}

/// Lowercase `text` one character at a time
///
/// Search and highlighting both compare through this fold so a search hit
/// always has a match to highlight.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Run a keyword search over `profile`
///
/// The query is trimmed first; an empty query matches nothing.
pub fn search_profile(profile: &Profile, query: &str) -> Vec<SearchResult> {
    let needle = fold_case(query.trim());
    if needle.is_empty() {
        return Vec::new();
    }
    let matches = |text: &str| fold_case(text).contains(&needle);

    let mut results = Vec::new();

    if matches(&profile.name) {
        results.push(SearchResult::Profile {
            title: profile.name.clone(),
            content: format!("Contact: {}", profile.email),
            highlight: profile.name.clone(),
        });
    }

    for skill in profile.skills.iter().filter(|s| matches(s)) {
        let used_in = profile
            .projects
            .iter()
            .filter(|p| p.uses_skill(skill))
            .count();
        results.push(SearchResult::Skill {
            title: skill.clone(),
            content: format!("Used in {} projects", used_in),
            highlight: skill.clone(),
        });
    }

    for project in &profile.projects {
        if matches(&project.title) || matches(&project.description) {
            results.push(SearchResult::Project {
                title: project.title.clone(),
                content: project.description.clone(),
                highlight: project.title.clone(),
                skills: project.skills.clone(),
            });
        }
    }

    for work in &profile.work {
        if matches(&work.company) || matches(&work.role) || matches(&work.description) {
            results.push(SearchResult::Work {
                title: work.headline(),
                content: work.description.clone(),
                highlight: work.company.clone(),
            });
        }
    }

    results
}
