use serde::Deserialize;
use std::env;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_OVERFETCH_FACTOR: usize = 3;

/// Feed tunables. The over-fetch factor is a heuristic, kept configurable
/// rather than hard-coded; the source cannot filter by language server-side,
/// so each fetch pulls `page_size * overfetch_factor` raw items to leave the
/// ranker something to reorder.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub page_size: usize,
    pub overfetch_factor: usize,
    pub author_cache_enabled: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            overfetch_factor: DEFAULT_OVERFETCH_FACTOR,
            author_cache_enabled: true,
        }
    }
}

impl FeedConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = FeedConfig {
            page_size: env::var("FEED_PAGE_SIZE")
                .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
                .parse()?,
            overfetch_factor: env::var("FEED_OVERFETCH_FACTOR")
                .unwrap_or_else(|_| DEFAULT_OVERFETCH_FACTOR.to_string())
                .parse()?,
            author_cache_enabled: env::var("AUTHOR_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(true),
        };

        if config.page_size == 0 {
            return Err("FEED_PAGE_SIZE must be positive".into());
        }
        if config.overfetch_factor == 0 {
            return Err("FEED_OVERFETCH_FACTOR must be positive".into());
        }

        Ok(config)
    }
}
