use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
}

impl User {
    /// Name to show, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.login)
    }

    /// Blog as a clickable URL; profiles often omit the scheme.
    pub fn blog_url(&self) -> Option<String> {
        let blog = self.blog.as_deref().filter(|b| !b.is_empty())?;
        if blog.starts_with("http") {
            Some(blog.to_string())
        } else {
            Some(format!("https://{}", blog))
        }
    }

    /// Blog without its scheme.
    pub fn blog_display(&self) -> Option<String> {
        let blog = self.blog.as_deref().filter(|b| !b.is_empty())?;
        let stripped = blog
            .strip_prefix("https://")
            .or_else(|| blog.strip_prefix("http://"))
            .unwrap_or(blog);
        Some(stripped.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub fork: bool,
    pub visibility: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Repository {
    pub fn is_public(&self) -> bool {
        self.visibility.as_deref() == Some("public")
    }

    /// Owner segment of `full_name` for forks.
    pub fn forked_from(&self) -> Option<&str> {
        if !self.fork {
            return None;
        }
        self.full_name.split('/').next()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(blog: Option<&str>) -> User {
        User {
            login: "octocat".to_string(),
            name: None,
            avatar_url: String::new(),
            html_url: "https://github.com/octocat".to_string(),
            bio: None,
            company: None,
            location: None,
            email: None,
            blog: blog.map(str::to_string),
            twitter_username: None,
            followers: 0,
            following: 0,
            public_repos: 0,
        }
    }

    #[test]
    fn test_blog_helpers() {
        let u = user(Some("example.dev"));
        assert_eq!(u.blog_url().as_deref(), Some("https://example.dev"));
        assert_eq!(u.blog_display().as_deref(), Some("example.dev"));

        let u = user(Some("http://example.dev/blog"));
        assert_eq!(u.blog_url().as_deref(), Some("http://example.dev/blog"));
        assert_eq!(u.blog_display().as_deref(), Some("example.dev/blog"));

        assert_eq!(user(Some("")).blog_url(), None);
        assert_eq!(user(None).blog_display(), None);
    }

    #[test]
    fn test_display_name_falls_back_to_login() {
        let mut u = user(None);
        assert_eq!(u.display_name(), "octocat");
        u.name = Some("The Octocat".to_string());
        assert_eq!(u.display_name(), "The Octocat");
    }

    #[test]
    fn test_decode_repository() {
        let json = r#"{
            "id": 1, "name": "hello", "full_name": "octocat/hello",
            "html_url": "https://github.com/octocat/hello",
            "description": null, "language": "Rust",
            "stargazers_count": 5, "forks_count": 1, "fork": true,
            "visibility": "public", "updated_at": "2024-05-01T10:00:00Z"
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert!(repo.is_public());
        assert_eq!(repo.forked_from(), Some("octocat"));
        assert_eq!(repo.language.as_deref(), Some("Rust"));
    }
}
