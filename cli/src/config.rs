//! Fixed run parameters.
//!
//! The binary always runs with `Config::default()`; nothing on the command
//! line or in the environment changes these. Tests build their own `Config`
//! to point at a local server, a temp dir or a shorter timeout.

use std::path::PathBuf;
use std::time::Duration;

pub const API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const LIMIT: usize = 20;
pub const OUTPUT: &str = "todos.csv";
pub const TIMEOUT: Duration = Duration::from_secs(10);
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub limit: usize,
    pub output: PathBuf,
    /// Bound on the whole request, connect through body.
    pub timeout: Duration,
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            limit: LIMIT,
            output: PathBuf::from(OUTPUT),
            timeout: TIMEOUT,
            preview_rows: PREVIEW_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_fixed_constants() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.limit, 20);
        assert_eq!(config.output, PathBuf::from("todos.csv"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.preview_rows, 5);
    }
}
