use crate::error::Result;
use crate::model::contribution::ContributionData;
use crate::model::profile::{Organization, Repository, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepoOrder {
    Created,
    #[default]
    Updated,
    Pushed,
    FullName,
}

impl RepoOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            RepoOrder::Created => "created",
            RepoOrder::Updated => "updated",
            RepoOrder::Pushed => "pushed",
            RepoOrder::FullName => "full_name",
        }
    }
}

/// Server-side ordering for the repository listing. Only the first page is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoQuery {
    pub sort: RepoOrder,
    pub ascending: bool,
    pub per_page: u32,
}

impl Default for RepoQuery {
    fn default() -> Self {
        Self {
            sort: RepoOrder::Updated,
            ascending: false,
            per_page: 30,
        }
    }
}

pub trait ContributionSource {
    fn contributions(&self, username: &str) -> Result<ContributionData>;
}

pub trait ProfileSource {
    fn user(&self, username: &str) -> Result<User>;
    fn repositories(&self, username: &str, query: RepoQuery) -> Result<Vec<Repository>>;
    fn organizations(&self, username: &str) -> Result<Vec<Organization>>;
    fn starred(&self, username: &str, per_page: u32) -> Result<Vec<Repository>>;
}
