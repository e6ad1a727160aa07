//! Read-only query layer over a single profile
//!
//! `ProfileStore` owns one immutable [`Profile`] and answers four queries
//! against it. Every query is a total, deterministic function of its input
//! and the stored profile; nothing here can fail and nothing mutates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::profile::{Profile, Project, sample_profile};
use crate::search::{SearchResult, search_profile};

/// Token that selects every project
pub const ALL_SKILLS: &str = "all";

/// Project filter: every project, or those tagged with one skill
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillFilter {
    #[default]
    All,
    Skill(String),
}

impl SkillFilter {
    /// Filter for one exact skill tag
    pub fn skill(name: impl Into<String>) -> Self {
        Self::Skill(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Wire form; `"all"` for [`SkillFilter::All`]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SKILLS,
            Self::Skill(name) => name,
        }
    }

    /// Whether a project passes this filter
    pub fn accepts(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Skill(name) => project.uses_skill(name),
        }
    }
}

impl From<&str> for SkillFilter {
    fn from(s: &str) -> Self {
        if s == ALL_SKILLS {
            Self::All
        } else {
            Self::Skill(s.to_string())
        }
    }
}

impl From<String> for SkillFilter {
    fn from(s: String) -> Self {
        if s == ALL_SKILLS {
            Self::All
        } else {
            Self::Skill(s)
        }
    }
}

impl From<SkillFilter> for String {
    fn from(filter: SkillFilter) -> Self {
        match filter {
            SkillFilter::All => ALL_SKILLS.to_string(),
            SkillFilter::Skill(name) => name,
        }
    }
}

impl FromStr for SkillFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for SkillFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How often a skill is used across projects
///
/// Derived on every call to [`ProfileStore::get_top_skills`]; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillUsage {
    pub name: String,
    /// Number of projects listing this skill
    pub count: usize,
    /// Titles of those projects, in profile order
    pub projects: Vec<String>,
}

/// Owner of the profile and its queries
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile: Profile,
}

impl ProfileStore {
    /// Create a store over the given profile
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Return the full profile, exactly as seeded
    pub fn get_profile(&self) -> &Profile {
        &self.profile
    }

    /// Projects passing `filter`, in profile order
    ///
    /// An unknown skill yields an empty list.
    pub fn get_projects_by_skill(&self, filter: &SkillFilter) -> Vec<&Project> {
        let projects: Vec<&Project> = self
            .profile
            .projects
            .iter()
            .filter(|p| filter.accepts(p))
            .collect();
        debug!(filter = %filter, count = projects.len(), "projects by skill");
        projects
    }

    /// Skills ranked by how many projects use them
    ///
    /// Only skills referenced by at least one project appear; profile-level
    /// skills that no project uses are left out. Ordered by count descending.
    /// Equal counts keep first-encountered order: the order in which each
    /// skill first appears walking projects, and each project's tags, as
    /// authored.
    pub fn get_top_skills(&self) -> Vec<SkillUsage> {
        // Each entry remembers the last project position it counted
        let mut tally: Vec<(SkillUsage, Option<usize>)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for (position, project) in self.profile.projects.iter().enumerate() {
            for skill in &project.skills {
                let slot = match index.get(skill.as_str()) {
                    Some(&slot) => slot,
                    None => {
                        tally.push((
                            SkillUsage {
                                name: skill.clone(),
                                count: 0,
                                projects: Vec::new(),
                            },
                            None,
                        ));
                        index.insert(skill.as_str(), tally.len() - 1);
                        tally.len() - 1
                    }
                };
                let (usage, counted) = &mut tally[slot];
                // A tag repeated within one project still counts that project once
                if *counted != Some(position) {
                    *counted = Some(position);
                    usage.count += 1;
                    usage.projects.push(project.title.clone());
                }
            }
        }

        let mut usages: Vec<SkillUsage> = tally.into_iter().map(|(usage, _)| usage).collect();
        // sort_by is stable, which gives the first-encountered tie-break
        usages.sort_by(|a, b| b.count.cmp(&a.count));
        debug!(count = usages.len(), "top skills");
        usages
    }

    /// Case-insensitive keyword search; see [`crate::search`]
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let results = search_profile(&self.profile, query);
        debug!(query, count = results.len(), "search");
        results
    }
}

impl Default for ProfileStore {
    /// A store over the bundled profile
    fn default() -> Self {
        Self::new(sample_profile())
    }
}
