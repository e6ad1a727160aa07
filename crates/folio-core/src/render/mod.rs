//! Text rendering shared by the CLI and TUI
//!
//! - **highlight**: case-insensitive match emphasis, as marked-up text or
//!   as flagged runs for styled output
//! - **text**: plain-text layouts of the profile, projects, skills
//!   dashboard, and search views

mod highlight;
mod text;

pub use highlight::{highlight, highlight_spans};
pub use text::{
    DashboardStats, EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE, RenderOptions, SEARCHING_MESSAGE,
    render_profile, render_projects, render_search_results, render_skills_dashboard,
    skill_count_label, skill_name_width,
};
