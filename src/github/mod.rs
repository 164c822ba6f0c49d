// GitHub API module.
// Provides the client and types used to fetch repository card data.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{GITHUB_API_BASE, GITHUB_COLORS_URL, GitHubClient};
pub use types::*;
