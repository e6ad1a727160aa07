//! Profile data types
//!
//! This module defines the root aggregate and its child records. Every
//! collection is ordered as authored; that order is preserved by all
//! non-filtering queries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The root aggregate of all portfolio data for one person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Named links (github, linkedin, portfolio, ...) to URLs
    pub links: BTreeMap<String, String>,
    /// Education history, as authored
    pub education: Vec<EducationEntry>,
    /// Profile-level skill tags, as authored
    pub skills: Vec<String>,
    /// Projects, as authored
    pub projects: Vec<Project>,
    /// Work history, as authored
    pub work: Vec<WorkEntry>,
}

impl Profile {
    /// Create an empty profile with a name and email
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            links: BTreeMap::new(),
            education: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            work: Vec::new(),
        }
    }

    /// Add a named link
    pub fn with_link(mut self, kind: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.insert(kind.into(), url.into());
        self
    }

    /// Append an education entry
    pub fn with_education(mut self, entry: EducationEntry) -> Self {
        self.education.push(entry);
        self
    }

    /// Set the profile-level skill tags
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Append a project
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Append a work entry
    pub fn with_work(mut self, entry: WorkEntry) -> Self {
        self.work.push(entry);
        self
    }

    /// Look up a named link
    pub fn link(&self, kind: &str) -> Option<&str> {
        self.links.get(kind).map(String::as_str)
    }
}

/// A degree or certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

impl EducationEntry {
    pub fn new(
        institution: impl Into<String>,
        degree: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            institution: institution.into(),
            degree: degree.into(),
            year: year.into(),
        }
    }
}

/// A portfolio project
///
/// `title` acts as the identifier within a profile, though uniqueness is
/// not enforced. Skill tags are expected to also appear in
/// [`Profile::skills`] but this is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub links: Vec<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            skills: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Set the project's skill tags
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the project's link URLs
    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Exact, case-sensitive tag membership
    pub fn uses_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Links paired with the kind inferred from their URL
    pub fn labeled_links(&self) -> impl Iterator<Item = (LinkKind, &str)> {
        self.links
            .iter()
            .map(|url| (LinkKind::from_url(url), url.as_str()))
    }
}

/// A job in the work history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub company: String,
    pub role: String,
    /// Free-text range such as "2019 - 2021"
    pub duration: String,
    pub description: String,
}

impl WorkEntry {
    pub fn new(
        company: impl Into<String>,
        role: impl Into<String>,
        duration: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            duration: duration.into(),
            description: description.into(),
        }
    }

    /// "{role} at {company}"
    pub fn headline(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }
}

/// Kind of a project link, inferred from its URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// URL mentions github
    GitHub,
    /// URL mentions demo
    LiveDemo,
    /// Anything else
    Other,
}

impl LinkKind {
    /// Infer the kind from a URL; `github` wins over `demo`
    pub fn from_url(url: &str) -> Self {
        if url.contains("github") {
            Self::GitHub
        } else if url.contains("demo") {
            Self::LiveDemo
        } else {
            Self::Other
        }
    }

    /// Button label shown next to a project
    pub fn label(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LiveDemo => "Live Demo",
            Self::Other => "Link",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
