use serde::Deserialize;
use std::env;

pub const DEFAULT_SAMPLE_COUNT: usize = 15_000;
pub const DEFAULT_BAR_WIDTH: usize = 50;
pub const DEFAULT_RUN_ENV: &str = "local";

/// Name of the environment overlay, `RUN_ENV` or `local` when unset.
pub fn run_env() -> String {
    env::var("RUN_ENV").unwrap_or_else(|_| DEFAULT_RUN_ENV.into())
}

/// Histogram settings. Passed explicitly to every histogram call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatsConfig {
    pub sample_count: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { sample_count: DEFAULT_SAMPLE_COUNT }
    }
}

impl StatsConfig {
    pub fn set_sample_count(&mut self, sample_count: usize) {
        self.sample_count = sample_count;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlotConfig {
    pub bar_width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub stats: StatsConfig,
    pub plot: PlotConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = run_env();

        let builder = ::config::Config::builder()
            .set_default("stats.sample_count", DEFAULT_SAMPLE_COUNT as i64)?
            .set_default("plot.bar_width", DEFAULT_BAR_WIDTH as i64)?
            .set_default("logging.level", "info")?
            .add_source(config::File::with_name("config/default.toml").required(false))
            .add_source(
                config::File::with_name(&format!("config/{}", env))
                    .required(false),
            )
            .add_source(config::File::with_name("config/local.toml").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_defaults() {
        env::remove_var("APP__STATS__SAMPLE_COUNT");
        env::remove_var("APP__LOGGING__LEVEL");

        let config = Config::load().unwrap();
        assert_eq!(config.stats, StatsConfig::default());
        assert_eq!(config.plot.bar_width, DEFAULT_BAR_WIDTH);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    #[serial]
    fn test_environment_overrides_sample_count() {
        env::set_var("APP__STATS__SAMPLE_COUNT", "500");
        env::set_var("APP__LOGGING__LEVEL", "debug");

        let config = Config::load();

        env::remove_var("APP__STATS__SAMPLE_COUNT");
        env::remove_var("APP__LOGGING__LEVEL");

        let config = config.unwrap();
        assert_eq!(config.stats.sample_count, 500);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    #[serial]
    fn test_run_env_falls_back_to_local() {
        env::remove_var("RUN_ENV");
        assert_eq!(run_env(), "local");

        env::set_var("RUN_ENV", "staging");
        let named = run_env();
        env::remove_var("RUN_ENV");
        assert_eq!(named, "staging");
    }

    #[test]
    fn test_set_sample_count() {
        let mut stats = StatsConfig::default();
        assert_eq!(stats.sample_count, 15_000);
        stats.set_sample_count(500);
        assert_eq!(stats.sample_count, 500);
    }
}
