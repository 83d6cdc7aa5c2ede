use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

use chatbird_decorator::DecoratorConfig;

pub const TRANSCRIPT_VAR: &str = "CHATBIRD_TRANSCRIPT";
pub const SHORT_SEPARATION_VAR: &str = "CHATBIRD_SHORT_SEPARATION";
pub const NORMAL_SEPARATION_VAR: &str = "CHATBIRD_NORMAL_SEPARATION";
pub const THRESHOLD_VAR: &str = "CHATBIRD_SEPARATION_THRESHOLD_SECS";
pub const DATE_FORMAT_VAR: &str = "CHATBIRD_DATE_FORMAT";

#[derive(Debug)]
pub struct Config {
    pub transcript: PathBuf,
    pub decorator: DecoratorConfig,
}

impl Config {
    /// Reads configuration from the process environment. A path given on
    /// the command line wins over `CHATBIRD_TRANSCRIPT`.
    pub fn from_env(arg: Option<String>) -> Result<Self> {
        Self::from_lookup(arg, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(arg: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let transcript = arg
            .or_else(|| lookup(TRANSCRIPT_VAR))
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("no transcript given: pass a path or set {}", TRANSCRIPT_VAR))?;

        let mut decorator = DecoratorConfig::default();
        if let Some(value) = parse_var::<f32, _>(&lookup, SHORT_SEPARATION_VAR)? {
            decorator = decorator.with_short_separation(value)?;
        }
        if let Some(value) = parse_var::<f32, _>(&lookup, NORMAL_SEPARATION_VAR)? {
            decorator = decorator.with_normal_separation(value)?;
        }
        if let Some(value) = parse_var::<i64, _>(&lookup, THRESHOLD_VAR)? {
            decorator = decorator.with_separation_threshold_secs(value)?;
        }
        if let Some(format) = lookup(DATE_FORMAT_VAR) {
            decorator = decorator.with_time_separator_format(format)?;
        }

        Ok(Self {
            transcript,
            decorator,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid {}: {:?}", key, raw))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn argument_wins_over_env() {
        let config = Config::from_lookup(
            Some("cli.json".into()),
            lookup(&[(TRANSCRIPT_VAR, "env.json")]),
        )
        .unwrap();
        assert_eq!(config.transcript, PathBuf::from("cli.json"));
        assert_eq!(config.decorator, DecoratorConfig::default());
    }

    #[test]
    fn missing_transcript_is_an_error() {
        assert!(Config::from_lookup(None, lookup(&[])).is_err());
    }

    #[test]
    fn decorator_overrides() {
        let config = Config::from_lookup(
            None,
            lookup(&[
                (TRANSCRIPT_VAR, "t.json"),
                (SHORT_SEPARATION_VAR, "2"),
                (NORMAL_SEPARATION_VAR, " 6.5 "),
                (THRESHOLD_VAR, "60"),
                (DATE_FORMAT_VAR, "%Y-%m-%d"),
            ]),
        )
        .unwrap();
        assert_eq!(config.decorator.short_separation(), 2.0);
        assert_eq!(config.decorator.normal_separation(), 6.5);
        assert_eq!(config.decorator.separation_threshold().num_seconds(), 60);
        assert_eq!(config.decorator.time_separator_format(), "%Y-%m-%d");
    }

    #[test]
    fn malformed_values_are_errors() {
        let bad_number = Config::from_lookup(
            None,
            lookup(&[(TRANSCRIPT_VAR, "t.json"), (SHORT_SEPARATION_VAR, "wide")]),
        );
        assert!(bad_number.is_err());

        let negative = Config::from_lookup(
            None,
            lookup(&[(TRANSCRIPT_VAR, "t.json"), (THRESHOLD_VAR, "-1")]),
        );
        assert!(negative.is_err());
    }
}
