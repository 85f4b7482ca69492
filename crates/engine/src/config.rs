//! Engine configuration
//!
//! Read from environment variables:
//!
//! - `TETRIS_TICK_MS`: gravity period in milliseconds (default 1000)
//! - `TETRIS_SPAWN_ORDER`: `bag` (default) or `round-robin`
//! - `TETRIS_SEED`: seed for the bag order (default 1)
//! - `TETRIS_SCORE_TABLE`: five comma-separated points for 0-4 rows
//!   (default `0,100,300,500,800`)
//! - `TETRIS_LOG_PATH`: append session events as JSON lines to this file

use std::time::Duration;

use thiserror::Error;

use crate::core::{Rules, ScoreTable, ScoreTableError, SpawnOrder};
use crate::types::{DEFAULT_SEED, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: expected a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("TETRIS_TICK_MS must be greater than zero")]
    ZeroTick,
    #[error("TETRIS_SPAWN_ORDER: unknown spawn order {0:?} (expected \"bag\" or \"round-robin\")")]
    UnknownSpawnOrder(String),
    #[error("TETRIS_SCORE_TABLE: expected five comma-separated numbers, got {0:?}")]
    InvalidScoreTable(String),
    #[error("TETRIS_SCORE_TABLE: {0}")]
    ScoreTable(#[from] ScoreTableError),
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub tick_ms: u64,
    pub rules: Rules,
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            rules: Rules::default(),
            log_path: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let tick_ms = match var("TETRIS_TICK_MS") {
            Some(s) => parse_number("TETRIS_TICK_MS", &s)?,
            None => TICK_MS,
        };
        if tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        let seed = match var("TETRIS_SEED") {
            Some(s) => parse_number("TETRIS_SEED", &s)?,
            None => DEFAULT_SEED,
        };

        let spawn_order = match var("TETRIS_SPAWN_ORDER").as_deref() {
            None | Some("bag") => SpawnOrder::Bag { seed },
            Some("round-robin") => SpawnOrder::RoundRobin,
            Some(other) => return Err(ConfigError::UnknownSpawnOrder(other.to_string())),
        };

        let score_table = match var("TETRIS_SCORE_TABLE") {
            Some(s) => parse_score_table(&s)?,
            None => ScoreTable::default(),
        };

        Ok(Self {
            tick_ms,
            rules: Rules {
                spawn_order,
                score_table,
            },
            log_path: var("TETRIS_LOG_PATH"),
        })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

fn parse_score_table(value: &str) -> Result<ScoreTable, ConfigError> {
    let invalid = || ConfigError::InvalidScoreTable(value.to_string());

    let mut points = [0u32; 5];
    let mut parts = value.split(',');
    for slot in points.iter_mut() {
        *slot = parts
            .next()
            .and_then(|p| p.trim().parse().ok())
            .ok_or_else(invalid)?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(ScoreTable::new(points)?)
}
