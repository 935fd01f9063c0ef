use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::model::contribution::ContributionData;
use crate::repository::traits::ContributionSource;

/// Reads a contributions document saved from the API. Read-only.
#[derive(Clone, Debug)]
pub struct FileContributionRepository {
    file_path: PathBuf,
}

impl FileContributionRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    fn read_data(&self) -> Result<ContributionData> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let data: ContributionData = serde_json::from_reader(reader)?;
        debug!(
            path = %self.file_path.display(),
            records = data.contributions.len(),
            years = data.total.len(),
            "loaded contributions file"
        );
        Ok(data)
    }
}

impl ContributionSource for FileContributionRepository {
    // The document belongs to a single user, so the name is not consulted.
    fn contributions(&self, _username: &str) -> Result<ContributionData> {
        self.read_data()
    }
}
