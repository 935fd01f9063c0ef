use anyhow::Result;
use ghprofile_core::{
    language_color, ContributionDashboard, MonthActivitySummary, Organization, Repository, User,
};
use serde::Serialize;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct YearRow {
    #[tabled(rename = "")]
    marker: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Contributions")]
    total: u64,
}

#[derive(Tabled)]
struct RepoRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Stars")]
    stars: u64,
    #[tabled(rename = "Forks")]
    forks: u64,
    #[tabled(rename = "Updated")]
    updated: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct OrgRow {
    #[tabled(rename = "Login")]
    login: String,
    #[tabled(rename = "Description")]
    description: String,
}

const DESCRIPTION_WIDTH: usize = 60;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

pub fn print_years(dashboard: &ContributionDashboard) {
    let totals = &dashboard.data().total;
    let rows: Vec<YearRow> = dashboard
        .years()
        .iter()
        .map(|&year| YearRow {
            marker: if year == dashboard.selected_year() { "*".to_string() } else { String::new() },
            year,
            total: totals.get(&year).copied().unwrap_or(0),
        })
        .collect();

    println!("{}", render(rows));
    println!(
        "{} (all time: {})",
        dashboard.headline(),
        dashboard.all_time_total()
    );
}

pub fn print_summary(summary: Option<&MonthActivitySummary>) {
    match summary {
        Some(s) => {
            println!("\x1b[1;36m{} {}\x1b[0m", s.month_name, s.year);
            println!("  {} contributions", s.total_count);
            println!("  {}", s.date_range_label);
        }
        None => println!("No activity this month."),
    }
}

pub fn print_profile(user: &User, orgs: &[Organization]) {
    println!("\x1b[1;36m{}\x1b[0m ({})", user.display_name(), user.login);
    if let Some(bio) = &user.bio {
        println!("  {}", bio);
    }
    println!("  {} followers · {} following · {} public repos", user.followers, user.following, user.public_repos);

    let details = [
        ("Company", user.company.clone()),
        ("Location", user.location.clone()),
        ("Email", user.email.clone()),
        ("Blog", user.blog_display()),
        ("Twitter", user.twitter_username.as_ref().map(|t| format!("@{}", t))),
    ];
    for (label, value) in details.iter() {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            println!("  {:<9} {}", label, v);
        }
    }

    if !orgs.is_empty() {
        let logins: Vec<&str> = orgs.iter().map(|o| o.login.as_str()).collect();
        println!("  Orgs      {}", logins.join(", "));
    }
}

pub fn print_repositories(repos: &[Repository]) {
    if repos.is_empty() {
        println!("No repositories found.");
        return;
    }

    let rows: Vec<RepoRow> = repos
        .iter()
        .map(|r| RepoRow {
            name: match r.forked_from() {
                Some(owner) => format!("{} (fork of {})", r.name, owner),
                None => r.name.clone(),
            },
            language: match r.language.as_deref() {
                Some(lang) => format!("{} {}", lang, language_color(Some(lang))),
                None => "-".to_string(),
            },
            stars: r.stargazers_count,
            forks: r.forks_count,
            updated: r.updated_at.format("%Y-%m-%d").to_string(),
            description: r
                .description
                .as_deref()
                .map(|d| truncate(d, DESCRIPTION_WIDTH))
                .unwrap_or_default(),
        })
        .collect();

    println!("{}", render(rows));
}

pub fn print_languages(names: &[String]) {
    if names.is_empty() {
        println!("No languages found.");
        return;
    }
    for name in names {
        println!("{} {}", language_color(Some(name.as_str())), name);
    }
}

pub fn print_organizations(orgs: &[Organization]) {
    if orgs.is_empty() {
        println!("No organizations found.");
        return;
    }
    let rows: Vec<OrgRow> = orgs
        .iter()
        .map(|o| OrgRow {
            login: o.login.clone(),
            description: o.description.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", render(rows));
}
