//! Plain-text rendering of the four views

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::profile::{Profile, Project};
use crate::search::SearchResult;
use crate::store::{SkillFilter, SkillUsage};

use super::highlight::highlight;

pub const EMPTY_QUERY_MESSAGE: &str = "Enter a search term to get started";
pub const NO_RESULTS_MESSAGE: &str = "No results found for your search";
pub const SEARCHING_MESSAGE: &str = "Searching...";

/// Options for text rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Marker before a highlighted match
    pub highlight_open: String,
    /// Marker after a highlighted match
    pub highlight_close: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for RenderOptions {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            highlight_open: display.highlight_open.clone(),
            highlight_close: display.highlight_close.clone(),
        }
    }
}

/// Headline numbers on the skills dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_skills: usize,
    pub total_projects: usize,
}

impl DashboardStats {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            total_skills: profile.skills.len(),
            total_projects: profile.projects.len(),
        }
    }
}

/// "Used in N project(s)" for a dashboard card
pub fn skill_count_label(count: usize) -> String {
    format!(
        "Used in {} project{}",
        count,
        if count > 1 { "s" } else { "" }
    )
}

/// Render the profile view
pub fn render_profile(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n", profile.name, profile.email));

    if !profile.links.is_empty() {
        out.push_str("\nLinks\n");
        for (kind, url) in &profile.links {
            out.push_str(&format!("  {}: {}\n", kind, url));
        }
    }

    out.push_str("\nEducation\n");
    for edu in &profile.education {
        out.push_str(&format!("  {}\n", edu.degree));
        out.push_str(&format!("    {}, {}\n", edu.institution, edu.year));
    }

    out.push_str("\nSkills\n");
    out.push_str(&format!("  {}\n", profile.skills.join(", ")));

    out.push_str("\nWork Experience\n");
    for work in &profile.work {
        out.push_str(&format!("  {}\n", work.role));
        out.push_str(&format!("    {} | {}\n", work.company, work.duration));
        out.push_str(&format!("    {}\n", work.description));
    }

    out
}

/// Render the projects view
///
/// The filter bar lists `all` followed by every profile skill, with the
/// active filter bracketed.
pub fn render_projects(projects: &[&Project], all_skills: &[String], active: &SkillFilter) -> String {
    let mut out = String::new();

    let mut filters = vec![filter_chip(&SkillFilter::All, active)];
    filters.extend(
        all_skills
            .iter()
            .map(|s| filter_chip(&SkillFilter::skill(s.as_str()), active)),
    );
    out.push_str(&format!("Filter: {}\n", filters.join(" ")));

    if projects.is_empty() {
        out.push_str(&format!("\nNo projects use {}\n", active));
        return out;
    }

    for project in projects {
        out.push_str(&format!("\n{}\n", project.title));
        out.push_str(&format!("  {}\n", project.description));
        out.push_str(&format!("  Skills: {}\n", project.skills.join(", ")));
        for (kind, url) in project.labeled_links() {
            out.push_str(&format!("  {}: {}\n", kind, url));
        }
    }

    out
}

fn filter_chip(filter: &SkillFilter, active: &SkillFilter) -> String {
    if filter == active {
        format!("[{}]", filter)
    } else {
        filter.to_string()
    }
}

/// Display width of the widest skill name, counted in characters
pub fn skill_name_width(top_skills: &[SkillUsage]) -> usize {
    top_skills
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
}

/// Render the skills dashboard
pub fn render_skills_dashboard(top_skills: &[SkillUsage], stats: DashboardStats) -> String {
    let mut out = format!(
        "Total skills: {} | Total projects: {}\n",
        stats.total_skills, stats.total_projects
    );

    let width = skill_name_width(top_skills);
    out.push_str("\nTop Skills\n");
    for skill in top_skills {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            skill.name,
            skill_count_label(skill.count),
            width = width
        ));
    }
    out
}

/// Render search results with matches of `query` emphasized
pub fn render_search_results(
    results: &[SearchResult],
    query: &str,
    options: &RenderOptions,
) -> String {
    if query.trim().is_empty() {
        return format!("{}\n", EMPTY_QUERY_MESSAGE);
    }
    if results.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    let mark = |text: &str| {
        highlight(
            text,
            query,
            &options.highlight_open,
            &options.highlight_close,
        )
    };

    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} | {}\n", result.kind(), mark(result.title())));
        out.push_str(&format!("  {}\n", mark(result.content())));
        if let Some(skills) = result.skills() {
            out.push_str(&format!("  Skills: {}\n", skills.join(", ")));
        }
    }
    out
}
