//! TUI application state
//!
//! Key handling and api responses both land here. Neither touches the
//! terminal or the runtime: a key press yields at most one [`Request`] for
//! the event loop to run, and the loop hands back a [`Response`].

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::api::ApiStatus;
use folio_core::profile::{Profile, Project};
use folio_core::search::SearchResult;
use folio_core::store::{SkillFilter, SkillUsage};
use folio_core::view::{Action, AppState, Reload, View};
use tracing::{debug, warn};

/// An api call the event loop should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Profile,
    Projects(SkillFilter),
    TopSkills,
    Search(String),
}

/// The outcome of a [`Request`]
#[derive(Debug)]
pub enum Response {
    Profile(folio_core::Result<Profile>),
    Projects {
        filter: SkillFilter,
        result: folio_core::Result<Vec<Project>>,
    },
    TopSkills(folio_core::Result<Vec<SkillUsage>>),
    Search {
        query: String,
        result: folio_core::Result<Vec<SearchResult>>,
    },
}

/// Last completed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<SearchResult>,
}

pub struct App {
    pub state: AppState,
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub top_skills: Vec<SkillUsage>,
    pub search: Option<SearchOutcome>,
    /// Query sent to the api whose results have not arrived
    pub pending_search: Option<String>,
    /// Text typed into the search box
    pub search_input: String,
    pub search_focused: bool,
    /// Highlighted row on the skills dashboard
    pub selected_skill: usize,
    /// View whose data is loading, if it shows an indicator
    pub loading: Option<View>,
    pub api_status: ApiStatus,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(view: View) -> Self {
        Self {
            state: AppState::new(view),
            profile: None,
            projects: Vec::new(),
            top_skills: Vec::new(),
            search: None,
            pending_search: None,
            search_input: String::new(),
            search_focused: false,
            selected_skill: 0,
            loading: None,
            api_status: ApiStatus::Unknown,
            error: None,
            should_quit: false,
        }
    }

    /// Requests to send before the first frame
    ///
    /// The profile always loads first since every other view reads its
    /// skills or counts.
    pub fn startup_requests(&mut self) -> Vec<Request> {
        let mut requests: Vec<Request> = self.load_view(View::Profile).into_iter().collect();
        let view = self.state.current_view;
        if view != View::Profile {
            requests.extend(self.load_view(view));
        }
        requests
    }

    /// Build the request behind `view`, raising the loading indicator
    fn load_view(&mut self, view: View) -> Option<Request> {
        let request = match view {
            View::Profile => Request::Profile,
            View::Projects => Request::Projects(self.state.skill_filter.clone()),
            View::Skills => Request::TopSkills,
            // Search loads on Enter, not on navigation
            View::Search => return None,
        };
        if self.state.shows_loading(view) {
            self.loading = Some(view);
        }
        Some(request)
    }

    /// Apply a state action and load whatever it names
    pub fn dispatch(&mut self, action: Action) -> Option<Request> {
        debug!(?action, "dispatch");
        self.error = None;
        match self.state.apply(action) {
            Reload::View(view) => self.load_view(view),
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        if self.search_focused {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.dispatch(Action::SwitchView(View::all()[index]))
            }
            KeyCode::Tab => self.dispatch(Action::SwitchView(self.state.current_view.next())),
            KeyCode::BackTab => self.dispatch(Action::SwitchView(self.state.current_view.prev())),
            KeyCode::Char('/') => {
                self.search_focused = true;
                if self.state.current_view != View::Search {
                    return self.dispatch(Action::SwitchView(View::Search));
                }
                None
            }
            KeyCode::Char('f') if self.state.current_view == View::Projects => {
                let next = self.next_filter();
                self.dispatch(Action::FilterBySkill(next))
            }
            KeyCode::Char('r') => self.load_view(self.state.current_view),
            KeyCode::Up | KeyCode::Char('k') if self.state.current_view == View::Skills => {
                self.selected_skill = self.selected_skill.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') if self.state.current_view == View::Skills => {
                if self.selected_skill + 1 < self.top_skills.len() {
                    self.selected_skill += 1;
                }
                None
            }
            KeyCode::Enter if self.state.current_view == View::Skills => {
                let skill = self.top_skills.get(self.selected_skill)?.name.clone();
                self.dispatch(Action::FilterBySkill(SkillFilter::skill(skill)))
            }
            _ => None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Esc => {
                self.search_focused = false;
                None
            }
            KeyCode::Enter => self.submit_search(),
            KeyCode::Backspace => {
                self.search_input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
                None
            }
            _ => None,
        }
    }

    /// Run the typed query; a blank box clears results without a call
    pub fn submit_search(&mut self) -> Option<Request> {
        let query = self.search_input.trim().to_string();
        if query.is_empty() {
            self.search = None;
            self.pending_search = None;
            self.finish(View::Search);
            return None;
        }
        if self.state.shows_loading(View::Search) {
            self.loading = Some(View::Search);
        }
        self.pending_search = Some(query.clone());
        Some(Request::Search(query))
    }

    /// The filter after the active one: `all`, then each profile skill
    pub fn next_filter(&self) -> SkillFilter {
        let skills = self.profile.as_ref().map(|p| p.skills.as_slice()).unwrap_or(&[]);
        let position = match &self.state.skill_filter {
            SkillFilter::All => None,
            SkillFilter::Skill(name) => skills.iter().position(|s| s == name),
        };
        let next = match position {
            None => 0,
            Some(i) => i + 1,
        };
        skills
            .get(next)
            .map(|s| SkillFilter::skill(s.as_str()))
            .unwrap_or(SkillFilter::All)
    }

    /// Fold an api response into the state
    pub fn on_response(&mut self, response: Response) {
        match response {
            Response::Profile(result) => {
                self.finish(View::Profile);
                match result {
                    Ok(profile) => {
                        self.profile = Some(profile);
                        self.state.mark_initialized();
                    }
                    Err(e) => self.fail("profile", e),
                }
            }
            Response::Projects { filter, result } => {
                // A newer filter has been chosen since this was sent
                if filter != self.state.skill_filter {
                    return;
                }
                self.finish(View::Projects);
                match result {
                    Ok(projects) => self.projects = projects,
                    Err(e) => self.fail("projects", e),
                }
            }
            Response::TopSkills(result) => {
                self.finish(View::Skills);
                match result {
                    Ok(top_skills) => {
                        self.selected_skill = self
                            .selected_skill
                            .min(top_skills.len().saturating_sub(1));
                        self.top_skills = top_skills;
                    }
                    Err(e) => self.fail("skills", e),
                }
            }
            Response::Search { query, result } => {
                // Only the latest submitted query lands
                if self.pending_search.as_deref() != Some(query.as_str()) {
                    return;
                }
                self.pending_search = None;
                self.finish(View::Search);
                match result {
                    Ok(results) => self.search = Some(SearchOutcome { query, results }),
                    Err(e) => self.fail("search", e),
                }
            }
        }
    }

    fn finish(&mut self, view: View) {
        if self.loading == Some(view) {
            self.loading = None;
        }
    }

    fn fail(&mut self, what: &str, error: folio_core::Error) {
        warn!(what, error = %error, "request failed");
        self.error = Some(format!("Failed to load {}: {}", what, error));
    }

    pub fn is_loading(&self) -> bool {
        self.loading == Some(self.state.current_view)
    }
}
