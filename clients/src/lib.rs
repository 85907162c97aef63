//! Shared plumbing for the `automata-*` binaries: log setup and config
//! loading.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use automata::AutomataConfig;
use tracing::level_filters::LevelFilter;

/// Maps a `-v` count to a log level: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr fmt subscriber. Results go to stdout, logs never do.
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads `path` as TOML, or the defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<AutomataConfig> {
    let Some(path) = path else {
        return Ok(AutomataConfig::default());
    };
    let config = AutomataConfig::from_file(path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Sleeps between displayed generations; zero means no pause.
pub fn pause(delay_ms: u64) {
    if delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(delay_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(2), LevelFilter::DEBUG);
        assert_eq!(level_for(9), LevelFilter::TRACE);
    }

    #[test]
    fn missing_path_gives_defaults() {
        assert_eq!(load_config(None).ok(), Some(AutomataConfig::default()));
    }

    #[test]
    fn unreadable_path_names_the_file() {
        let err = load_config(Some(Path::new("/nonexistent/automata.toml")))
            .err()
            .map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("loading config from /nonexistent/automata.toml")
        );
    }
}
