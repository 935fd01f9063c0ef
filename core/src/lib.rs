pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::Config;
pub use error::{CoreError, Result};
pub use model::calendar::{CalendarGrid, MonthAnchor, Week, WeekCell};
pub use model::contribution::{ContributionData, ContributionRecord, YearTotals};
pub use model::profile::{Organization, Repository, User};
pub use model::summary::MonthActivitySummary;
pub use repository::{
    ContributionSource, FileContributionRepository, HttpProfileRepository, ProfileSource,
    RepoOrder, RepoQuery,
};
pub use service::calendar_service::build_calendar;
pub use service::dto::{CalendarGridDto, MonthLabelDto, WeekCellDto};
pub use service::repo_service::{
    filter_repositories, language_color, languages, search_starred, select_pinned, RepoFilter,
    RepoSort, RepoType,
};
pub use service::stats_service::{
    available_years, available_years_now, current_month_summary, current_month_summary_now,
    month_summary, total_contributions, trailing_total, window_total, year_total,
};
pub use usecase::dashboard::ContributionDashboard;
pub use usecase::year_selector::YearSelector;
