use std::env;
use std::str::FromStr;

use crate::{Error, Result};

/// Number of random queries per benchmark run
pub const ENV_INSTANCES: &str = "SSSP_BENCH_INSTANCES";
/// Seed for graph generation and query sampling
pub const ENV_SEED: &str = "SSSP_SEED";
/// Comma-separated vertex counts for the benchmark sweep
pub const ENV_SIZES: &str = "SSSP_BENCH_SIZES";
/// Comma-separated densities (percent) for the benchmark sweep
pub const ENV_DENSITIES: &str = "SSSP_BENCH_DENSITIES";

/// Configuration for the batch benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub vertex_counts: Vec<usize>,
    pub densities: Vec<u32>,
    pub instances: usize,
    /// Fixed seed for reproducible runs, entropy when `None`
    pub seed: Option<u64>,
    pub json_output: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            vertex_counts: vec![50, 100, 200, 400],
            densities: vec![25, 50, 75, 99],
            instances: 20,
            seed: None,
            json_output: false,
        }
    }
}

impl BenchmarkConfig {
    /// Defaults overridden by any `SSSP_*` environment variables that are set
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(instances) = env_value::<usize>(ENV_INSTANCES)? {
            config.instances = instances;
        }
        if let Some(seed) = env_value::<u64>(ENV_SEED)? {
            config.seed = Some(seed);
        }
        if let Some(raw) = env_string(ENV_SIZES) {
            config.vertex_counts = parse_list(ENV_SIZES, &raw)?;
        }
        if let Some(raw) = env_string(ENV_DENSITIES) {
            config.densities = parse_list(ENV_DENSITIES, &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks that the sweep describes at least one runnable cell
    pub fn validate(&self) -> Result<()> {
        if self.instances == 0 {
            return Err(Error::InvalidParameter("instances must be positive".to_string()));
        }
        if self.vertex_counts.is_empty() || self.vertex_counts.contains(&0) {
            return Err(Error::InvalidParameter(
                "vertex counts must be a non-empty list of positive numbers".to_string(),
            ));
        }
        if self.densities.is_empty() || self.densities.iter().any(|&d| d > 100) {
            return Err(Error::InvalidParameter(
                "densities must be a non-empty list of percentages".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    /// Suggested number of benchmark instances
    pub default_instances: usize,
    pub seed: Option<u64>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_instances: 10,
            seed: None,
        }
    }
}

impl MenuConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(instances) = env_value::<usize>(ENV_INSTANCES)? {
            config.default_instances = instances;
        }
        if let Some(seed) = env_value::<u64>(ENV_SEED)? {
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_value<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env_string(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidParameter(format!("{}: cannot parse {:?}", key, raw))),
    }
}

/// Parses a comma-separated list such as `"50, 100,200"`
pub fn parse_list<T: FromStr>(key: &str, raw: &str) -> Result<Vec<T>> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse()
                .map_err(|_| Error::InvalidParameter(format!("{}: cannot parse {:?}", key, item)))
        })
        .collect()
}
