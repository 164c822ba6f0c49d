// Page controller.
// Owns the cache, GitHub client and UI state, and dispatches page events explicitly.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cache::{FileStore, TimedCache};
use crate::config::Config;
use crate::error::Result;
use crate::github::{GitHubClient, RepoSlug};
use crate::render::render_card;
use crate::state::{SidebarState, Theme, indicator_width, scroll_percent};

/// Events the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    ThemeToggled,
    SidebarToggled,
    Scrolled {
        scroll_top: f64,
        scroll_height: f64,
        client_height: f64,
    },
}

pub struct Page {
    cache: TimedCache,
    client: GitHubClient,
    ttl: Duration,
    sidebar_width: u32,
    /// Current colour theme, loaded from the store.
    pub theme: Theme,
    pub sidebar: SidebarState,
    /// CSS width of the scroll indicator bar.
    pub scroll_width: String,
}

impl Page {
    pub fn new(
        cache: TimedCache,
        client: GitHubClient,
        ttl: Duration,
        sidebar_width: u32,
    ) -> Self {
        let theme = Theme::load(cache.store().as_ref());
        Self {
            cache,
            client,
            ttl,
            sidebar_width,
            theme,
            sidebar: SidebarState::default(),
            scroll_width: indicator_width(0.0),
        }
    }

    /// Build a page backed by the file store and wall clock.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = Arc::new(FileStore::new(&config.storage_path));
        let cache = TimedCache::with_system_clock(store);
        let client = GitHubClient::new(
            config.token.as_deref(),
            &config.api_base,
            &config.colors_url,
            config.timeout,
        )?;
        Ok(Self::new(cache, client, config.ttl, config.sidebar_width))
    }

    pub fn handle_event(&mut self, event: PageEvent) -> Result<()> {
        match event {
            PageEvent::ThemeToggled => {
                self.theme = self.theme.toggled();
                self.theme.save(self.cache.store().as_ref())?;
                info!("theme set to {}", self.theme.as_str());
            }
            PageEvent::SidebarToggled => {
                self.sidebar = self.sidebar.toggled();
                debug!("sidebar {:?}", self.sidebar);
            }
            PageEvent::Scrolled {
                scroll_top,
                scroll_height,
                client_height,
            } => {
                let percent = scroll_percent(scroll_top, scroll_height, client_height);
                self.scroll_width = indicator_width(percent);
            }
        }
        Ok(())
    }

    /// CSS width of the sidebar in its current state.
    pub fn sidebar_css_width(&self) -> String {
        self.sidebar.css_width(self.sidebar_width)
    }

    /// JSON for an arbitrary URL, through the cache.
    pub async fn fetch_json(&mut self, url: &str) -> Result<Value> {
        self.client.cached_json(&self.cache, url, self.ttl).await
    }

    /// Render a card for each repository, in order.
    ///
    /// A repository whose details fail to load yields `None` and is logged;
    /// failing to load the emoji or colour table fails the whole call.
    pub async fn decorate(&mut self, slugs: &[RepoSlug]) -> Result<Vec<Option<String>>> {
        let emojis = self.client.get_emojis(&self.cache, self.ttl).await?;
        let colors = self.client.get_language_colors(&self.cache, self.ttl).await?;

        let mut cards = Vec::with_capacity(slugs.len());
        for slug in slugs {
            match self.client.get_repo_details(&self.cache, slug, self.ttl).await {
                Ok(details) => cards.push(Some(render_card(&details, &emojis, &colors))),
                Err(e) => {
                    warn!("skipping {}: {}", slug, e);
                    cards.push(None);
                }
            }
        }
        Ok(cards)
    }
}
