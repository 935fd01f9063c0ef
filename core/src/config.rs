use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_CONTRIBUTIONS_API: &str = "https://github-contributions-api.jogruber.de/v4";
pub const DEFAULT_USERNAME: &str = "shreeramk";
pub const DEFAULT_PER_PAGE: u32 = 30;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const CONFIG_DIR_NAME: &str = ".ghprofile";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub github_api_base: String,
    pub contributions_api_base: String,
    pub username: String,
    pub per_page: u32,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_base: DEFAULT_GITHUB_API.to_string(),
            contributions_api_base: DEFAULT_CONTRIBUTIONS_API.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Config file contents; every field is optional.
#[derive(Deserialize, Debug, Default)]
struct FileConfig {
    github_api_base: Option<String>,
    contributions_api_base: Option<String>,
    username: Option<String>,
    per_page: Option<u32>,
    timeout_secs: Option<u64>,
}

impl Config {
    /// Defaults, then `~/.ghprofile/config.json` if present, then environment.
    pub fn load() -> Result<Self> {
        Self::load_with(default_config_path().as_deref(), |k| std::env::var(k).ok())
    }

    /// Same layering as [`Config::load`] with the file path and the variable
    /// lookup supplied by the caller, which keeps tests away from the process
    /// environment.
    pub fn load_with<F>(path: Option<&Path>, get: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = path {
            config.merge_file(path)?;
        }
        config.merge_env_with(get)?;
        Ok(config)
    }

    fn merge_env_with<F>(&mut self, mut get: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(v) = get("GHPROFILE_GITHUB_API") {
            self.github_api_base = v;
        }
        if let Some(v) = get("GHPROFILE_CONTRIB_API") {
            self.contributions_api_base = v;
        }
        if let Some(v) = get("GHPROFILE_USER") {
            self.username = v;
        }
        if let Some(v) = get("GHPROFILE_PER_PAGE") {
            self.per_page = v
                .parse()
                .map_err(|_| CoreError::Config(format!("GHPROFILE_PER_PAGE is not a number: {}", v)))?;
        }
        if let Some(v) = get("GHPROFILE_TIMEOUT_SECS") {
            self.timeout_secs = v
                .parse()
                .map_err(|_| CoreError::Config(format!("GHPROFILE_TIMEOUT_SECS is not a number: {}", v)))?;
        }
        self.validate()
    }

    /// Overlays values from a JSON config file. A missing file is not an error.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let content = fs::read_to_string(path)?;
        let file: FileConfig = serde_json::from_str(&content)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))?;

        if let Some(v) = file.github_api_base {
            self.github_api_base = v;
        }
        if let Some(v) = file.contributions_api_base {
            self.contributions_api_base = v;
        }
        if let Some(v) = file.username {
            self.username = v;
        }
        if let Some(v) = file.per_page {
            self.per_page = v;
        }
        if let Some(v) = file.timeout_secs {
            self.timeout_secs = v;
        }
        self.validate()
    }

    /// Checks the username and page size. Call again after applying
    /// command-line overrides.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(CoreError::Config("username must not be empty".into()));
        }
        if self.per_page == 0 || self.per_page > 100 {
            return Err(CoreError::Config(format!(
                "per_page must be between 1 and 100, got {}",
                self.per_page
            )));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = Config::load_with(None, |_| None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.github_api_base, "https://api.github.com");
        assert_eq!(cfg.username, "shreeramk");
        assert_eq!(cfg.per_page, 30);
    }

    #[test]
    fn test_env_overrides() {
        let get = |k: &str| match k {
            "GHPROFILE_USER" => Some("octocat".into()),
            "GHPROFILE_GITHUB_API" => Some("http://localhost:9000".into()),
            "GHPROFILE_PER_PAGE" => Some("50".into()),
            _ => None,
        };
        let cfg = Config::load_with(None, get).unwrap();
        assert_eq!(cfg.username, "octocat");
        assert_eq!(cfg.github_api_base, "http://localhost:9000");
        assert_eq!(cfg.per_page, 50);
        assert_eq!(cfg.contributions_api_base, DEFAULT_CONTRIBUTIONS_API);
    }

    #[test]
    fn test_env_rejects_bad_numbers() {
        let get = |k: &str| match k {
            "GHPROFILE_TIMEOUT_SECS" => Some("soon".into()),
            _ => None,
        };
        assert!(matches!(Config::load_with(None, get), Err(CoreError::Config(_))));

        let get = |k: &str| match k {
            "GHPROFILE_PER_PAGE" => Some("500".into()),
            _ => None,
        };
        assert!(Config::load_with(None, get).is_err());
    }

    #[test]
    fn test_file_then_env_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"username": "from-file", "timeout_secs": 3}}"#).unwrap();

        let mut cfg = Config::default();
        cfg.merge_file(&path).unwrap();
        assert_eq!(cfg.username, "from-file");
        assert_eq!(cfg.timeout_secs, 3);

        cfg.merge_env_with(|k| (k == "GHPROFILE_USER").then(|| "from-env".to_string()))
            .unwrap();
        assert_eq!(cfg.username, "from-env");
        assert_eq!(cfg.timeout_secs, 3);
    }

    #[test]
    fn test_load_with_layers_file_under_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"username": "from-file", "per_page": 12}"#).unwrap();

        let get = |k: &str| (k == "GHPROFILE_USER").then(|| "from-env".to_string());
        let cfg = Config::load_with(Some(path.as_path()), get).unwrap();
        assert_eq!(cfg.username, "from-env");
        assert_eq!(cfg.per_page, 12);
    }

    #[test]
    fn test_validate_rejects_blank_username() {
        let cfg = Config {
            username: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.merge_file(&dir.path().join("absent.json")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        let mut cfg = Config::default();
        assert!(matches!(cfg.merge_file(&path), Err(CoreError::Config(_))));
    }
}
