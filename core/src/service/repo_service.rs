use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::model::profile::Repository;

const PINNED_LIMIT: usize = 6;
const DEFAULT_LANGUAGE_COLOR: &str = "#8b949e";

// Linguist colours for the languages most profiles show.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("C++", "#f34b7d"),
    ("C", "#555555"),
    ("C#", "#178600"),
    ("Ruby", "#701516"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("Swift", "#F05138"),
    ("Kotlin", "#A97BFF"),
    ("PHP", "#4F5D95"),
    ("Dart", "#00B4AB"),
    ("Shell", "#89e051"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("SCSS", "#c6538c"),
    ("Vue", "#41b883"),
    ("Svelte", "#ff3e00"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("R", "#198CE7"),
    ("Scala", "#c22d40"),
    ("Elixir", "#6e4a7e"),
    ("Clojure", "#db5855"),
    ("Haskell", "#5e5086"),
    ("Lua", "#000080"),
    ("Perl", "#0298c3"),
    ("Assembly", "#6E4C13"),
    ("PowerShell", "#012456"),
    ("Dockerfile", "#384d54"),
    ("Makefile", "#427819"),
    ("TeX", "#3D6117"),
    ("Vim", "#019733"),
    ("Objective-C", "#438eff"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoSort {
    #[default]
    Updated,
    Name,
    Stars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoType {
    #[default]
    All,
    Public,
    Fork,
    Source,
}

#[derive(Debug, Clone, Default)]
pub struct RepoFilter {
    pub query: Option<String>,
    pub repo_type: RepoType,
    pub language: Option<String>,
    pub sort: RepoSort,
}

fn matches_query(repo: &Repository, query: &str, include_full_name: bool) -> bool {
    let query = query.to_lowercase();
    repo.name.to_lowercase().contains(&query)
        || (include_full_name && repo.full_name.to_lowercase().contains(&query))
        || repo
            .description
            .as_deref()
            .map(|d| d.to_lowercase().contains(&query))
            .unwrap_or(false)
}

fn matches_type(repo: &Repository, repo_type: RepoType) -> bool {
    match repo_type {
        RepoType::All => true,
        RepoType::Public => repo.is_public(),
        RepoType::Fork => repo.fork,
        RepoType::Source => !repo.fork,
    }
}

pub fn sort_repositories(repos: &mut [Repository], sort: RepoSort) {
    repos.sort_by(|a, b| match sort {
        RepoSort::Updated => b.updated_at.cmp(&a.updated_at),
        RepoSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        RepoSort::Stars => b.stargazers_count.cmp(&a.stargazers_count),
    });
}

/// Query, type and language filters applied in that order, then sorted.
pub fn filter_repositories(repos: &[Repository], filter: &RepoFilter) -> Vec<Repository> {
    let query = filter.query.as_deref().filter(|q| !q.is_empty());
    let language = filter.language.as_deref().filter(|l| !l.is_empty());

    let mut filtered: Vec<Repository> = repos
        .iter()
        .filter(|r| query.map(|q| matches_query(r, q, false)).unwrap_or(true))
        .filter(|r| matches_type(r, filter.repo_type))
        .filter(|r| language.map(|l| r.language.as_deref() == Some(l)).unwrap_or(true))
        .cloned()
        .collect();

    sort_repositories(&mut filtered, filter.sort);
    filtered
}

/// Starred repositories matching `query` by name, full name or description.
pub fn search_starred(repos: &[Repository], query: &str) -> Vec<Repository> {
    if query.is_empty() {
        return repos.to_vec();
    }
    repos
        .iter()
        .filter(|r| matches_query(r, query, true))
        .cloned()
        .collect()
}

/// Distinct languages, sorted.
pub fn languages(repos: &[Repository]) -> Vec<String> {
    repos
        .iter()
        .filter_map(|r| r.language.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Up to six repositories to feature: described ones first, then by stars,
/// then most recently updated.
pub fn select_pinned(repos: &[Repository]) -> Vec<Repository> {
    let mut sorted = repos.to_vec();
    sorted.sort_by(|a, b| {
        let described = |r: &Repository| r.description.as_deref().map(|d| !d.is_empty()).unwrap_or(false);
        match described(b).cmp(&described(a)) {
            Ordering::Equal => {}
            other => return other,
        }
        match b.stargazers_count.cmp(&a.stargazers_count) {
            Ordering::Equal => {}
            other => return other,
        }
        b.updated_at.cmp(&a.updated_at)
    });
    sorted.truncate(PINNED_LIMIT);
    sorted
}

pub fn language_color(language: Option<&str>) -> &'static str {
    language
        .and_then(|lang| LANGUAGE_COLORS.iter().find(|(name, _)| *name == lang))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}
