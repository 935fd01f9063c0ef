pub mod file;
pub mod http;
pub mod traits;

pub use file::FileContributionRepository;
pub use http::HttpProfileRepository;
pub use traits::{ContributionSource, ProfileSource, RepoOrder, RepoQuery};
