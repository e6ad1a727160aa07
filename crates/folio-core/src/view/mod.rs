//! Presentation state for front ends
//!
//! The browser keeps three pieces of state: which view is showing, which
//! skill filter the projects view uses, and whether the first load has
//! happened. [`AppState`] holds them as a plain value owned by the front
//! end, and [`Action`] is the typed event that changes them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::store::SkillFilter;

/// One of the four browser views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Profile,
    Projects,
    Skills,
    Search,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Search => "search",
        }
    }

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Search => "Search",
        }
    }

    /// All views in navigation order
    pub fn all() -> [Self; 4] {
        [Self::Profile, Self::Projects, Self::Skills, Self::Search]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Profile => 0,
            Self::Projects => 1,
            Self::Skills => 2,
            Self::Search => 3,
        }
    }

    /// The view after this one, wrapping around
    pub fn next(&self) -> Self {
        Self::all()[(self.index() + 1) % 4]
    }

    /// The view before this one, wrapping around
    pub fn prev(&self) -> Self {
        Self::all()[(self.index() + 3) % 4]
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "profile" => Ok(Self::Profile),
            "projects" => Ok(Self::Projects),
            "skills" => Ok(Self::Skills),
            "search" => Ok(Self::Search),
            _ => Err(Error::UnknownView(s.to_string())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a view
    SwitchView(View),
    /// Show projects using one skill, or all of them
    FilterBySkill(SkillFilter),
}

/// What a front end must (re)load after an [`Action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    /// Load the data behind this view
    View(View),
}

/// Browser state, owned by the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub current_view: View,
    pub skill_filter: SkillFilter,
    pub initialized: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(View::Profile)
    }
}

impl AppState {
    /// Fresh state showing `view`, not yet initialized
    pub fn new(view: View) -> Self {
        Self {
            current_view: view,
            skill_filter: SkillFilter::All,
            initialized: false,
        }
    }

    /// Apply an event and report what needs loading
    ///
    /// Filtering by skill always ends on the projects view: it reloads in
    /// place if already there, otherwise it navigates there.
    pub fn apply(&mut self, action: Action) -> Reload {
        match action {
            Action::SwitchView(view) => {
                self.current_view = view;
                Reload::View(view)
            }
            Action::FilterBySkill(filter) => {
                self.skill_filter = filter;
                self.current_view = View::Projects;
                Reload::View(View::Projects)
            }
        }
    }

    /// Record that the first load completed
    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Whether loading `view` should show a loading indicator
    ///
    /// The profile view only shows one before initialization. The search
    /// view loads only when a query is submitted, and shows one while that
    /// query is in flight.
    pub fn shows_loading(&self, view: View) -> bool {
        match view {
            View::Profile => !self.initialized,
            View::Projects | View::Skills | View::Search => true,
        }
    }

    /// Whether a filter button is the active one
    pub fn is_active_filter(&self, filter: &SkillFilter) -> bool {
        &self.skill_filter == filter
    }
}
