use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_DATASET: &str = "data/dataset.csv";
pub const DEFAULT_SEARCHES: usize = 5000;
pub const DEFAULT_REMOVALS: usize = 1000;

/// Where the log4rs configuration is looked up.
pub const LOG_CONFIG: &str = "config/log4rs.yaml";

/// What the benchmark runs on.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dataset: PathBuf,
    pub searches: usize,
    pub removals: usize,
    /// Seed of the search key sampler; drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset: PathBuf::from(DEFAULT_DATASET),
            searches: DEFAULT_SEARCHES,
            removals: DEFAULT_REMOVALS,
            seed: None,
        }
    }
}

impl Config {
    /// Build the config from positional arguments `[dataset] [searches] [removals] [seed]`,
    /// not including the program name. Missing arguments keep their defaults.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        if let Some(dataset) = args.next() {
            config.dataset = PathBuf::from(dataset);
        }

        if let Some(searches) = args.next() {
            config.searches = parse_number("searches", searches)?;
        }

        if let Some(removals) = args.next() {
            config.removals = parse_number("removals", removals)?;
        }

        if let Some(seed) = args.next() {
            config.seed = Some(parse_number("seed", seed)?);
        }

        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}
