use anyhow::{Result, anyhow, bail};
use clap::Parser;
use log::LevelFilter;

use crate::selftest;

/// Command line of the `node-list` self-test binary.
#[derive(Debug, Parser)]
#[command(
    name = "node-list",
    version,
    about = "Runs the linked list usage examples as executable checks"
)]
pub struct Config {
    /// Log level used when RUST_LOG is not set (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Run a single named check
    #[arg(long, value_name = "NAME")]
    pub only: Option<String>,

    /// Print the check names and exit
    #[arg(long)]
    pub list: bool,
}

impl Config {
    /// Parses and validates `args`; `args[0]` is the program name.
    pub fn build<I, S>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.level_filter()?;

        if let Some(name) = &self.only {
            if selftest::find(name).is_none() {
                bail!("unknown check `{}`", name);
            }
        }

        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("unknown log level `{}`", self.log_level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::build(["node-list"]).unwrap();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
        assert_eq!(config.only, None);
        assert!(!config.list);
    }

    #[test]
    fn test_only_and_level() {
        let config =
            Config::build(["node-list", "--only", "push", "--log-level", "debug"]).unwrap();
        assert_eq!(config.only.as_deref(), Some("push"));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_unknown_check() {
        let err = Config::build(["node-list", "--only", "sort"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown check `sort`");
    }

    #[test]
    fn test_rejects_unknown_level() {
        let err = Config::build(["node-list", "--log-level", "loud"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown log level `loud`");
    }
}
