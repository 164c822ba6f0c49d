//! Command-line interface parsing for sitekit
//!
//! Flags fall back to environment variables where a site build would normally
//! provide them (`GITHUB_TOKEN`, `SITEKIT_CACHE_DIR`).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::cache::DEFAULT_TTL;
use crate::github::{GITHUB_API_BASE, GITHUB_COLORS_URL};
use crate::state::DEFAULT_SIDEBAR_WIDTH;

/// sitekit - cached GitHub repository cards and page state for static sites
#[derive(Parser, Debug)]
#[command(name = "sitekit")]
#[command(about = "Cached GitHub repository cards and page state for static sites")]
#[command(version)]
pub struct Cli {
    /// Directory holding the persisted store (defaults to the platform cache dir)
    #[arg(long, global = true, env = "SITEKIT_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Freshness window for fetched data, in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = DEFAULT_TTL.as_millis() as u64)]
    pub ttl_ms: u64,

    /// GitHub REST API base URL
    #[arg(long, global = true, value_name = "URL", default_value = GITHUB_API_BASE)]
    pub api_base: String,

    /// Language colour table URL
    #[arg(long, global = true, value_name = "URL", default_value = GITHUB_COLORS_URL)]
    pub colors_url: String,

    /// GitHub token; requests are unauthenticated without one
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Width of the open sidebar, in pixels
    #[arg(long, global = true, value_name = "PX", default_value_t = DEFAULT_SIDEBAR_WIDTH)]
    pub sidebar_width: u32,

    /// HTTP request timeout, in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print repository cards as HTML
    ///
    /// Examples:
    ///   sitekit cards rust-lang/rust
    ///   sitekit cards tokio-rs/tokio serde-rs/serde
    Cards {
        /// Repositories as owner/repo
        #[arg(required = true, value_name = "OWNER/REPO")]
        repos: Vec<String>,
    },
    /// Show or toggle the persisted light/dark theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Compute the scroll indicator width
    Scroll {
        /// Current scroll offset
        #[arg(long)]
        top: f64,
        /// Total scrollable height of the document
        #[arg(long)]
        height: f64,
        /// Height of the viewport
        #[arg(long)]
        client: f64,
    },
    /// Print the cached (or freshly fetched) JSON for a URL
    Get {
        #[arg(value_name = "URL")]
        url: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
}
