use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid calendar date: '{value}'")]
    Parse { value: String },
    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),
    #[error("month {0} is not between 1 and 12")]
    InvalidMonth(u32),
    #[error("no contribution data available for year {0}")]
    YearUnavailable(i32),
    #[error("request to {endpoint} failed with status {status}: {message}")]
    Api {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_offending_value() {
        let err = CoreError::Parse { value: "2024-13-01".to_string() };
        assert_eq!(err.to_string(), "invalid calendar date: '2024-13-01'");
    }

    #[test]
    fn api_error_carries_status_and_endpoint() {
        let err = CoreError::Api {
            status: 404,
            endpoint: "https://api.github.com/users/nobody".to_string(),
            message: "Not Found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("/users/nobody"));
    }
}
