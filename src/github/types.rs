// GitHub API response types.
// Defines the repository details, emoji table and language colours used to decorate pages.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The fields of `GET /repos/{owner}/{repo}` that a repository card shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoDetails {
    pub full_name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks: u64,
}

/// Emoji shortcode (without colons) to image URL, from `GET /emojis`.
pub type EmojiMap = HashMap<String, String>;

/// One entry of the github-colors table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageColor {
    pub color: Option<String>,
}

/// Language name to display colour.
pub type LanguageColors = HashMap<String, LanguageColor>;

/// An `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(Error::InvalidSlug(s.to_string())),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slug() {
        let slug: RepoSlug = "rust-lang/cargo".parse().unwrap();
        assert_eq!(slug.owner, "rust-lang");
        assert_eq!(slug.repo, "cargo");
        assert_eq!(slug.to_string(), "rust-lang/cargo");
    }

    #[test]
    fn test_parse_slug_rejects_malformed() {
        for bad in ["", "justowner", "/repo", "owner/", "a/b/c"] {
            assert!(
                matches!(bad.parse::<RepoSlug>(), Err(Error::InvalidSlug(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_repo_details_ignores_extra_fields() {
        let json = r#"{
            "id": 724712,
            "full_name": "rust-lang/rust",
            "description": "Empowering everyone :rocket:",
            "language": "Rust",
            "stargazers_count": 100,
            "forks": 12,
            "private": false
        }"#;

        let details: RepoDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.language.as_deref(), Some("Rust"));
        assert_eq!(details.stargazers_count, 100);
        assert_eq!(details.forks, 12);
    }

    #[test]
    fn test_language_colors_allow_null() {
        let json = r##"{"Rust": {"color": "#dea584", "url": "x"}, "Text": {"color": null}}"##;
        let colors: LanguageColors = serde_json::from_str(json).unwrap();

        assert_eq!(colors["Rust"].color.as_deref(), Some("#dea584"));
        assert_eq!(colors["Text"].color, None);
    }
}
