//! Folio Core Integration Tests
//!
//! Query properties checked against the bundled profile and small
//! hand-built ones.

use std::sync::Arc;

use folio_core::{
    api::{PortfolioApi, SimulatedApi},
    config::LatencyConfig,
    profile::{Profile, Project, WorkEntry, sample_profile},
    render::highlight_spans,
    search::{SearchResult, SearchResultKind},
    store::{ProfileStore, SkillFilter},
    view::{Action, AppState, Reload, View},
};

fn scenario_store() -> ProfileStore {
    ProfileStore::new(
        Profile::new("Alex Johnson", "alex@example.com")
            .with_skills(["React", "Node.js", "Python"])
            .with_project(
                Project::new("Chat App", "Messaging for teams").with_skills(["React", "Node.js"]),
            )
            .with_project(Project::new("ML Pipeline", "Model training").with_skills(["Python"])),
    )
}

fn titles(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.title.clone()).collect()
}

#[test]
fn test_all_filter_returns_full_sequence() {
    let store = ProfileStore::default();
    let all = store.get_projects_by_skill(&SkillFilter::All);
    let expected: Vec<&Project> = store.get_profile().projects.iter().collect();
    assert_eq!(all, expected);
}

#[test]
fn test_filter_partitions_projects_for_every_tag() {
    let store = ProfileStore::default();
    let profile = store.get_profile();

    let mut tags: Vec<&String> = profile.projects.iter().flat_map(|p| &p.skills).collect();
    tags.extend(&profile.skills);
    tags.sort();
    tags.dedup();

    for tag in tags {
        let filter = SkillFilter::skill(tag.as_str());
        let selected = store.get_projects_by_skill(&filter);

        for project in &profile.projects {
            let inside = selected.iter().any(|p| std::ptr::eq(*p, project));
            assert_eq!(inside, project.skills.contains(tag), "{} / {}", tag, project.title);
        }

        // Relative order matches profile order
        let positions: Vec<usize> = selected
            .iter()
            .map(|p| {
                profile
                    .projects
                    .iter()
                    .position(|q| std::ptr::eq(q, *p))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_top_skills_counts_and_titles() {
    let store = ProfileStore::default();
    let profile = store.get_profile();

    for usage in store.get_top_skills() {
        let expected: Vec<String> = profile
            .projects
            .iter()
            .filter(|p| p.skills.contains(&usage.name))
            .map(|p| p.title.clone())
            .collect();
        assert_eq!(usage.count, expected.len(), "{}", usage.name);
        assert_eq!(usage.projects, expected, "{}", usage.name);
    }
}

#[test]
fn test_top_skills_sorted_with_encounter_tie_break() {
    let top = ProfileStore::default().get_top_skills();
    assert!(top.windows(2).all(|w| w[0].count >= w[1].count));

    let ranked: Vec<(&str, usize)> = top.iter().map(|s| (s.name.as_str(), s.count)).collect();
    assert_eq!(
        ranked,
        vec![
            ("React", 4),
            ("Node.js", 4),
            ("PostgreSQL", 3),
            ("MongoDB", 3),
            ("Docker", 3),
            ("Express.js", 2),
            ("JavaScript", 2),
            ("Python", 2),
            ("TypeScript", 2),
            ("AWS", 2),
            ("Socket.io", 1),
            ("GraphQL", 1),
        ]
    );
}

#[test]
fn test_top_skills_omits_unused_profile_skills() {
    let top = ProfileStore::default().get_top_skills();
    // Git is listed on the profile but on no project
    assert!(top.iter().all(|s| s.name != "Git"));
    // Socket.io is on a project but not on the profile
    assert!(top.iter().any(|s| s.name == "Socket.io"));
}

#[test]
fn test_empty_search_yields_nothing() {
    let store = ProfileStore::default();
    assert!(store.search("").is_empty());
    assert!(store.search(" \n\t ").is_empty());
}

#[test]
fn test_search_groups_in_fixed_order() {
    let store = ProfileStore::default();
    for query in ["a", "e", "react", "node", "data", "developer"] {
        let kinds: Vec<SearchResultKind> = store.search(query).iter().map(|r| r.kind()).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted, "query {:?}", query);
    }
}

#[test]
fn test_search_subgroups_keep_profile_order() {
    let store = ProfileStore::default();
    let profile = store.get_profile();
    let results = store.search("e");

    let project_titles: Vec<&str> = results
        .iter()
        .filter(|r| r.kind() == SearchResultKind::Project)
        .map(|r| r.title())
        .collect();
    let expected: Vec<&str> = profile
        .projects
        .iter()
        .map(|p| p.title.as_str())
        .filter(|t| project_titles.contains(t))
        .collect();
    assert_eq!(project_titles, expected);
}

#[test]
fn test_search_mixed_categories() {
    let results = ProfileStore::default().search("docker");
    let kinds: Vec<SearchResultKind> = results.iter().map(SearchResult::kind).collect();
    assert_eq!(
        kinds,
        vec![
            SearchResultKind::Skill,
            SearchResultKind::Project,
            SearchResultKind::Project,
        ]
    );
    assert_eq!(results[0].content(), "Used in 3 projects");
    assert_eq!(results[1].title(), "Microservices API Gateway");
    assert_eq!(results[2].title(), "Machine Learning Model Deployment");
}

#[test]
fn test_search_work_by_company() {
    let results = ProfileStore::default().search("startupx");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title(), "Full-Stack Developer at StartupX");
    assert_eq!(results[0].highlight(), "StartupX");
}

#[test]
fn test_search_does_not_dedupe_across_groups() {
    let store = ProfileStore::new(
        Profile::new("Rust Fan", "r@example.com")
            .with_skills(["Rust"])
            .with_project(Project::new("Rust CLI", "tools").with_skills(["Rust"]))
            .with_work(WorkEntry::new("Rust Co", "Dev", "2020", "systems")),
    );
    let kinds: Vec<SearchResultKind> = store.search("rust").iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SearchResultKind::Profile,
            SearchResultKind::Skill,
            SearchResultKind::Project,
            SearchResultKind::Work,
        ]
    );
}

#[test]
fn test_every_search_hit_has_a_highlight() {
    let store = ProfileStore::new(
        Profile::new("İstanbul Dev", "dev@example.com").with_skills(["Café Ops"]),
    );
    for query in ["i\u{307}stanbul", "İSTANBUL", "i", "café", "CAFÉ"] {
        let results = store.search(query);
        assert!(!results.is_empty(), "query {:?}", query);
        for result in &results {
            let marked = highlight_spans(result.highlight(), query)
                .iter()
                .any(|(_, hit)| *hit);
            assert!(marked, "query {:?} on {:?}", query, result.highlight());
        }
    }
}

#[test]
fn test_get_profile_round_trip() {
    let store = ProfileStore::default();
    let first = store.get_profile().clone();
    let _ = store.search("react");
    let _ = store.get_top_skills();
    assert_eq!(store.get_profile(), &first);
    assert_eq!(&first, &sample_profile());
}

#[test]
fn test_scenario_a_filtering() {
    let store = scenario_store();
    assert_eq!(
        titles(&store.get_projects_by_skill(&SkillFilter::skill("React"))),
        vec!["Chat App"]
    );
    assert!(store.get_projects_by_skill(&SkillFilter::skill("Go")).is_empty());
}

#[test]
fn test_scenario_b_top_skills() {
    let top = scenario_store().get_top_skills();
    let react = top.iter().find(|s| s.name == "React").unwrap();
    assert_eq!(react.count, 1);
    assert_eq!(react.projects, vec!["Chat App"]);
    let python = top.iter().find(|s| s.name == "Python").unwrap();
    assert_eq!(python.count, 1);
    assert_eq!(python.projects, vec!["ML Pipeline"]);
}

#[test]
fn test_scenario_c_profile_first() {
    let results = ProfileStore::default().search("alex");
    assert_eq!(results[0].kind(), SearchResultKind::Profile);
    assert_eq!(results[0].title(), "Alex Johnson");
}

#[test]
fn test_scenario_d_no_match() {
    assert!(ProfileStore::default().search("nonexistent-zzz").is_empty());
}

#[test]
fn test_store_shared_across_threads() {
    let store = Arc::new(ProfileStore::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.get_top_skills())
        })
        .collect();
    let expected = store.get_top_skills();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[tokio::test]
async fn test_filter_click_flow_through_api() {
    let api = SimulatedApi::new(Arc::new(ProfileStore::default()))
        .with_latency(LatencyConfig::disabled());
    let mut state = AppState::default();
    state.mark_initialized();

    // Clicking a skill tag on the profile view lands on filtered projects
    let reload = state.apply(Action::FilterBySkill(SkillFilter::skill("GraphQL")));
    assert_eq!(reload, Reload::View(View::Projects));

    let projects = api.get_projects_by_skill(&state.skill_filter).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "GraphQL Social Network");
}
