use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use stories_core::DEFAULT_ENDPOINT;
use stories_engine::{FetchSettings, DEFAULT_STATE_FILE};
use stories_logging::{LogDestination, LogSettings, DEFAULT_LOG_FILE};

/// Search Hacker News stories from the terminal.
#[derive(Debug, Parser)]
#[command(name = "hacker-stories", version, about)]
pub struct Cli {
    /// Search endpoint; the term is appended to it verbatim.
    #[arg(long, env = "HACKER_STORIES_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// File holding the last search term between runs.
    #[arg(long, env = "HACKER_STORIES_STATE", default_value = DEFAULT_STATE_FILE)]
    pub state_file: PathBuf,

    /// Keep the search term in memory only.
    #[arg(long)]
    pub no_persist: bool,

    /// Where log records go.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Whole-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl Cli {
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            destination: match self.log {
                LogTarget::File => LogDestination::File,
                LogTarget::Terminal => LogDestination::Terminal,
                LogTarget::Both => LogDestination::Both,
            },
            level: if self.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
            file: self.log_file.clone(),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..FetchSettings::default()
        }
    }

    /// `None` when persistence is disabled.
    pub fn state_file(&self) -> Option<&Path> {
        (!self.no_persist).then_some(self.state_file.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_search_api() {
        let cli = Cli::try_parse_from(["hacker-stories"]).unwrap();
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.state_file(), Some(Path::new(DEFAULT_STATE_FILE)));
        assert_eq!(cli.log_settings().destination, LogDestination::File);
        assert_eq!(cli.log_settings().level, log::LevelFilter::Info);
        assert_eq!(cli.fetch_settings().request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "hacker-stories",
            "--endpoint",
            "http://localhost:8080/search?q=",
            "--no-persist",
            "--log",
            "both",
            "--verbose",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.endpoint, "http://localhost:8080/search?q=");
        assert_eq!(cli.state_file(), None);
        assert_eq!(cli.log_settings().destination, LogDestination::Both);
        assert_eq!(cli.log_settings().level, log::LevelFilter::Debug);
        assert_eq!(cli.fetch_settings().request_timeout, Duration::from_secs(5));
        assert_eq!(cli.fetch_settings().redirect_limit, 5);
    }
}
