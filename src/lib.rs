//! sitekit library
//!
//! Client-side enhancements for a static site: a time-windowed response cache,
//! GitHub repository cards rendered from cached API data, and explicit theme,
//! sidebar and scroll state.

pub mod cache;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod github;
pub mod page;
pub mod render;
pub mod state;

pub use cache::{CachedData, FileStore, MemoryStore, Store, TimedCache};
pub use error::{Error, Result};
pub use page::{Page, PageEvent};
