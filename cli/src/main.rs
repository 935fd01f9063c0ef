mod logging;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ghprofile_core::time::today_utc;
use ghprofile_core::{
    filter_repositories, languages, search_starred, select_pinned, Config, ContributionDashboard,
    FileContributionRepository, HttpProfileRepository, ProfileSource,
    RepoFilter, RepoQuery, RepoSort, RepoType,
};

#[derive(Parser)]
#[command(name = "ghprofile")]
#[command(about = "Public GitHub profile and contribution calendar data", long_about = None)]
struct Cli {
    /// Profile to inspect (overrides GHPROFILE_USER and the config file)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Read contributions from a saved API response instead of the network
    #[arg(long, global = true)]
    contributions_file: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Week-by-week contribution grid for one year, as JSON
    Calendar {
        /// Year to lay out (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Contribution totals per year
    Years {
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// This month's activity
    Activity,
    /// Profile card
    Profile,
    /// Repositories, filtered and sorted
    Repos {
        #[arg(long, value_enum, default_value_t = SortArg::Updated)]
        sort: SortArg,
        #[arg(long = "type", value_enum, default_value_t = TypeArg::All)]
        repo_type: TypeArg,
        #[arg(long)]
        language: Option<String>,
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Languages used across repositories, for `repos --language`
    Languages,
    /// Starred repositories
    Stars {
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Featured repositories
    Pinned,
    /// Organizations
    Orgs,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Updated,
    Name,
    Stars,
}

impl From<SortArg> for RepoSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Updated => RepoSort::Updated,
            SortArg::Name => RepoSort::Name,
            SortArg::Stars => RepoSort::Stars,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    All,
    Public,
    Fork,
    Source,
}

impl From<TypeArg> for RepoType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::All => RepoType::All,
            TypeArg::Public => RepoType::Public,
            TypeArg::Fork => RepoType::Fork,
            TypeArg::Source => RepoType::Source,
        }
    }
}

fn load_dashboard(
    cli: &Cli,
    http: &HttpProfileRepository,
    username: &str,
) -> Result<ContributionDashboard> {
    let today = today_utc();
    let dashboard = match &cli.contributions_file {
        Some(path) => {
            let source = FileContributionRepository::new(path);
            ContributionDashboard::load(&source, username, today)
                .with_context(|| format!("reading contributions from {}", path.display()))?
        }
        None => ContributionDashboard::load(http, username, today)
            .with_context(|| format!("fetching contributions for {}", username))?,
    };
    Ok(dashboard)
}

/// Applies command-line overrides and re-checks the result.
fn resolve_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if let Some(user) = &cli.user {
        config.username = user.clone();
    }
    config.validate().context("invalid command-line options")?;
    Ok(config)
}

fn select_year(dashboard: &mut ContributionDashboard, year: Option<i32>) -> Result<()> {
    if let Some(year) = year {
        dashboard.select_year(year)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = resolve_config(&cli, Config::load().context("loading configuration")?)?;
    let username = config.username.clone();
    let http = HttpProfileRepository::new(&config)?;

    match &cli.command {
        Commands::Calendar { year } => {
            let mut dashboard = load_dashboard(&cli, &http, &username)?;
            select_year(&mut dashboard, *year)?;
            let dto = dashboard.calendar_dto()?;
            report::print_json(&dto)?;
        }
        Commands::Years { year } => {
            let mut dashboard = load_dashboard(&cli, &http, &username)?;
            select_year(&mut dashboard, *year)?;
            if cli.json {
                report::print_json(&dashboard.data().total)?;
            } else {
                report::print_years(&dashboard);
            }
        }
        Commands::Activity => {
            let dashboard = load_dashboard(&cli, &http, &username)?;
            let summary = dashboard.month_summary()?;
            if cli.json {
                report::print_json(&summary)?;
            } else {
                report::print_summary(summary.as_ref());
            }
        }
        Commands::Profile => {
            let user = http.user(&username).with_context(|| format!("fetching user {}", username))?;
            let orgs = http.organizations(&username)?;
            if cli.json {
                report::print_json(&user)?;
            } else {
                report::print_profile(&user, &orgs);
            }
        }
        Commands::Repos { sort, repo_type, language, query } => {
            let repos = http.repositories(&username, RepoQuery { per_page: config.per_page, ..Default::default() })?;
            let filter = RepoFilter {
                query: query.clone(),
                repo_type: (*repo_type).into(),
                language: language.clone(),
                sort: (*sort).into(),
            };
            let filtered = filter_repositories(&repos, &filter);
            if cli.json {
                report::print_json(&filtered)?;
            } else {
                report::print_repositories(&filtered);
            }
        }
        Commands::Languages => {
            let repos = http.repositories(&username, RepoQuery { per_page: config.per_page, ..Default::default() })?;
            let names = languages(&repos);
            if cli.json {
                report::print_json(&names)?;
            } else {
                report::print_languages(&names);
            }
        }
        Commands::Stars { query } => {
            let starred = http.starred(&username, config.per_page)?;
            let found = search_starred(&starred, query.as_deref().unwrap_or(""));
            if cli.json {
                report::print_json(&found)?;
            } else {
                report::print_repositories(&found);
            }
        }
        Commands::Pinned => {
            let repos = http.repositories(&username, RepoQuery { per_page: config.per_page, ..Default::default() })?;
            let pinned = select_pinned(&repos);
            if cli.json {
                report::print_json(&pinned)?;
            } else {
                report::print_repositories(&pinned);
            }
        }
        Commands::Orgs => {
            let orgs = http.organizations(&username)?;
            if cli.json {
                report::print_json(&orgs)?;
            } else {
                report::print_organizations(&orgs);
            }
        }
    }
    Ok(())
}
