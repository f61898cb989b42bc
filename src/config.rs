//! Runtime configuration read from environment variables.
//!
//! - `TICTACTOE_LOG_PATH`: write logs to this file (unset or empty: no logging)
//! - `TICTACTOE_LOG`: `tracing_subscriber::EnvFilter` directive (default: `info`)
//! - `TICTACTOE_CELL_W` / `TICTACTOE_CELL_H`: terminal columns / rows per board cell

use std::env;
use std::path::PathBuf;

use crate::term::game_view::{
    DEFAULT_CELL_H, DEFAULT_CELL_W, MAX_CELL_H, MAX_CELL_W, MIN_CELL_H, MIN_CELL_W,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: None,
            log_filter: "info".to_string(),
            cell_w: DEFAULT_CELL_W,
            cell_h: DEFAULT_CELL_H,
        }
    }
}

impl Config {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    ///
    /// Unparseable or out-of-range values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup("TICTACTOE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("TICTACTOE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        let cell_w = parse_in_range(lookup("TICTACTOE_CELL_W"), MIN_CELL_W, MAX_CELL_W)
            .unwrap_or(defaults.cell_w);
        let cell_h = parse_in_range(lookup("TICTACTOE_CELL_H"), MIN_CELL_H, MAX_CELL_H)
            .unwrap_or(defaults.cell_h);

        Self {
            log_path,
            log_filter,
            cell_w,
            cell_h,
        }
    }
}

fn parse_in_range(value: Option<String>, min: u16, max: u16) -> Option<u16> {
    value
        .and_then(|s| s.trim().parse::<u16>().ok())
        .filter(|v| (min..=max).contains(v))
}
