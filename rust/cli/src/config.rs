//! Session configuration.
//!
//! Values are layered: built-in defaults, then the TOML file named by
//! `SHOWDOWN_CONFIG`, then the `SHOWDOWN_*` environment variables. Command
//! flags are applied last by the commands themselves through
//! [`Config::with_overrides`].

use serde::{Deserialize, Serialize};
use showdown_engine::round::STARTING_MONEY;
use std::fs;

pub const CONFIG_ENV: &str = "SHOWDOWN_CONFIG";
pub const SEED_ENV: &str = "SHOWDOWN_SEED";
pub const MONEY_ENV: &str = "SHOWDOWN_MONEY";
pub const ROUNDS_ENV: &str = "SHOWDOWN_ROUNDS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_money: i64,
    pub seed: Option<u64>,
    pub rounds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_money: ValueSource,
    pub seed: ValueSource,
    pub rounds: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_money: ValueSource::Default,
            seed: ValueSource::Default,
            rounds: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            seed: None,
            rounds: 1,
        }
    }
}

impl Config {
    /// Applies command-line flags on top of the resolved values and
    /// re-validates the result.
    pub fn with_overrides(
        mut self,
        rounds: Option<u32>,
        seed: Option<u64>,
        money: Option<i64>,
    ) -> Result<Config, ConfigError> {
        if let Some(r) = rounds {
            self.rounds = r;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(m) = money {
            self.starting_money = m;
        }
        validate(&self)?;
        Ok(self)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_money {
            cfg.starting_money = v;
            sources.starting_money = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {:?}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(money) = std::env::var(MONEY_ENV)
        && !money.is_empty()
    {
        cfg.starting_money = money
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting money: {:?}", money)))?;
        sources.starting_money = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var(ROUNDS_ENV)
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid rounds: {:?}", rounds)))?;
        sources.rounds = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_money: Option<i64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    rounds: Option<u32>,
}

/// Largest accepted starting bankroll. Leaves headroom so a session's
/// winnings cannot overflow the engine's `i64` money.
pub const MAX_STARTING_MONEY: i64 = i64::MAX / 2;

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >=1".into(),
        ));
    }
    if cfg.starting_money <= 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_money must be >0".into(),
        ));
    }
    if cfg.starting_money > MAX_STARTING_MONEY {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_money must be <= {}",
            MAX_STARTING_MONEY
        )));
    }
    Ok(())
}
