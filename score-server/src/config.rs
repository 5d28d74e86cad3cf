use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use score_types::{MatchFormat, Side};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Side credited with a point when a section has no recorded winner.
    pub default_winner: Side,
    pub format: MatchFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = MatchFormat::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT", 8080)?,
            default_winner: lookup("DEFAULT_WINNER")
                .map(|value| value.parse::<Side>().map_err(|e| anyhow!(e)))
                .transpose()
                .context("Invalid DEFAULT_WINNER")?
                .unwrap_or_default(),
            format: MatchFormat {
                games_per_set: parse_var(&lookup, "GAMES_PER_SET", defaults.games_per_set)?,
                tiebreak: parse_var(&lookup, "TIEBREAK", defaults.tiebreak)?,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            default_winner: Side::Top,
            format: MatchFormat::default(),
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", key, value)),
        None => Ok(default),
    }
}
