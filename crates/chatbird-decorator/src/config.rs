use chrono::TimeDelta;
use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

/// Default spacing below a message. Short and normal spacing currently share
/// one value; both slots are kept so they can diverge.
pub const DEFAULT_SHORT_SEPARATION: f32 = 3.0;
pub const DEFAULT_NORMAL_SEPARATION: f32 = 3.0;

/// Gap between two messages from the same sender above which normal spacing is used.
pub const DEFAULT_SEPARATION_THRESHOLD_SECS: i64 = 120;

/// Weekday and date, e.g. "Friday, Mar 1, 2024".
pub const DEFAULT_TIME_SEPARATOR_FORMAT: &str = "%A, %b %-d, %Y";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("separation must be a finite, non-negative number (got {0})")]
    InvalidSeparation(f32),

    #[error("separation threshold must not be negative (got {0}s)")]
    NegativeThreshold(i64),

    #[error("invalid time separator format: {0:?}")]
    InvalidDateFormat(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecoratorConfig {
    short_separation: f32,
    normal_separation: f32,
    separation_threshold: TimeDelta,
    time_separator_format: String,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            short_separation: DEFAULT_SHORT_SEPARATION,
            normal_separation: DEFAULT_NORMAL_SEPARATION,
            separation_threshold: TimeDelta::seconds(DEFAULT_SEPARATION_THRESHOLD_SECS),
            time_separator_format: DEFAULT_TIME_SEPARATOR_FORMAT.to_string(),
        }
    }
}

impl DecoratorConfig {
    pub fn short_separation(&self) -> f32 {
        self.short_separation
    }

    pub fn normal_separation(&self) -> f32 {
        self.normal_separation
    }

    pub fn separation_threshold(&self) -> TimeDelta {
        self.separation_threshold
    }

    pub fn time_separator_format(&self) -> &str {
        &self.time_separator_format
    }

    pub fn with_short_separation(mut self, value: f32) -> Result<Self, ConfigError> {
        self.short_separation = check_separation(value)?;
        Ok(self)
    }

    pub fn with_normal_separation(mut self, value: f32) -> Result<Self, ConfigError> {
        self.normal_separation = check_separation(value)?;
        Ok(self)
    }

    pub fn with_separation_threshold_secs(mut self, secs: i64) -> Result<Self, ConfigError> {
        if secs < 0 {
            return Err(ConfigError::NegativeThreshold(secs));
        }
        self.separation_threshold = TimeDelta::seconds(secs);
        Ok(self)
    }

    /// Sets the strftime pattern used for time separator labels.
    /// Patterns chrono cannot render are rejected here rather than at format time.
    pub fn with_time_separator_format(mut self, format: impl Into<String>) -> Result<Self, ConfigError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidDateFormat(format));
        }
        self.time_separator_format = format;
        Ok(self)
    }
}

fn check_separation(value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidSeparation(value))
    }
}
