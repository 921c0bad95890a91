use tracing::Level;

use crate::common::{TABLE_NAME_DEFAULT, TABLE_NAME_ENV};

const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Deployment settings read once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table_name = lookup(TABLE_NAME_ENV).unwrap_or(TABLE_NAME_DEFAULT.into());
        let log_level = lookup(LOG_LEVEL_ENV)
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::INFO);

        Self {
            table_name,
            log_level,
        }
    }
}

pub fn init_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();
}
