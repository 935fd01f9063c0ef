//! Blocking HTTP data source for the GitHub REST API and the contributions API.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::model::contribution::ContributionData;
use crate::model::profile::{Organization, Repository, User};
use crate::repository::traits::{ContributionSource, ProfileSource, RepoQuery};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = concat!("ghprofile/", env!("CARGO_PKG_VERSION"));
const MAX_ERROR_BODY_CHARS: usize = 256;

#[derive(Clone, Debug)]
pub struct HttpProfileRepository {
    github_api_base: String,
    contributions_api_base: String,
    client: Client,
}

impl HttpProfileRepository {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            github_api_base: config.github_api_base.trim_end_matches('/').to_string(),
            contributions_api_base: config.contributions_api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.github_api_base, username)
    }

    pub fn repos_url(&self, username: &str, query: RepoQuery) -> String {
        format!(
            "{}/users/{}/repos?sort={}&direction={}&per_page={}",
            self.github_api_base,
            username,
            query.sort.as_param(),
            if query.ascending { "asc" } else { "desc" },
            query.per_page
        )
    }

    pub fn orgs_url(&self, username: &str) -> String {
        format!("{}/users/{}/orgs", self.github_api_base, username)
    }

    pub fn starred_url(&self, username: &str, per_page: u32) -> String {
        format!("{}/users/{}/starred?per_page={}", self.github_api_base, username, per_page)
    }

    pub fn contributions_url(&self, username: &str) -> String {
        format!("{}/{}", self.contributions_api_base, username)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(error_from_response(url, resp));
        }
        let body = resp.text()?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "response");
        Ok(serde_json::from_str(&body)?)
    }
}

fn error_from_response(url: &str, resp: Response) -> CoreError {
    let status = resp.status();
    let body = resp.text().unwrap_or_default();
    let snippet: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    let message = if snippet.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        snippet
    };
    warn!(url, status = status.as_u16(), "request failed");
    CoreError::Api {
        status: status.as_u16(),
        endpoint: url.to_string(),
        message,
    }
}

impl ContributionSource for HttpProfileRepository {
    fn contributions(&self, username: &str) -> Result<ContributionData> {
        self.get_json(&self.contributions_url(username))
    }
}

impl ProfileSource for HttpProfileRepository {
    fn user(&self, username: &str) -> Result<User> {
        self.get_json(&self.user_url(username))
    }

    fn repositories(&self, username: &str, query: RepoQuery) -> Result<Vec<Repository>> {
        self.get_json(&self.repos_url(username, query))
    }

    fn organizations(&self, username: &str) -> Result<Vec<Organization>> {
        self.get_json(&self.orgs_url(username))
    }

    fn starred(&self, username: &str, per_page: u32) -> Result<Vec<Repository>> {
        self.get_json(&self.starred_url(username, per_page))
    }
}
