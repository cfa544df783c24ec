//! Configuration types for nbparse.
//!
//! [`Config::load`] reads `~/.config/nbparse/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] layers an
//! explicit file over the same defaults, and [`Config::defaults`] returns them
//! without touching the filesystem (useful in tests).

use chrono::{DateTime, Months, TimeDelta, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{BookmarkError, Result};
use crate::types::Visibility;
pub use crate::visibility::BooleanTokens;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[parser]
default_tags     = []
keep_nested_tags = true
default_pub      = 0
normalize_dates  = true
date_range       = "30 years"

[parser.boolean_tokens]
truthy = ["1", "true", "yes", "on"]
falsy  = ["0", "false", "no", "off"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/nbparse/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
}

/// `[parser]` section of `config.toml`. Fixed for the lifetime of a
/// [`BookmarkParser`](crate::BookmarkParser).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParserConfig {
    /// Tags prepended to every entry.
    #[serde(default)]
    pub default_tags: Vec<String>,
    /// Whether entries inherit the names of the folders they sit in.
    #[serde(default = "default_keep_nested_tags")]
    pub keep_nested_tags: bool,
    /// Visibility used when the markup says nothing.
    #[serde(default)]
    pub default_pub: Visibility,
    /// Whether over-long epoch values are trimmed back into `date_range`.
    #[serde(default = "default_normalize_dates")]
    pub normalize_dates: bool,
    /// Window, ending at now + range, that normalised dates must fall into.
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub boolean_tokens: BooleanTokens,
}

fn default_keep_nested_tags() -> bool { true }
fn default_normalize_dates() -> bool { true }

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_tags: Vec::new(),
            keep_nested_tags: default_keep_nested_tags(),
            default_pub: Visibility::default(),
            normalize_dates: default_normalize_dates(),
            date_range: DateRange::default(),
            boolean_tokens: BooleanTokens::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/nbparse/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();

        if !path.exists() {
            let written = path
                .parent()
                .map_or(Ok(()), std::fs::create_dir_all)
                .and_then(|_| std::fs::write(&path, DEFAULT_CONFIG.trim_start()));
            if let Err(source) = written {
                return Err(BookmarkError::Io { path, source });
            }
        }

        Self::load_from(&path)
    }

    /// Layer the TOML file at `path` over the built-in defaults. A missing
    /// file is an error here, unlike in [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BookmarkError::FileNotFound { path: path.to_path_buf() });
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Layer an in-memory TOML document over the built-in defaults.
    pub fn from_toml(toml: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Date range
// ---------------------------------------------------------------------------

/// A duration such as `"30 years"`, bounding how far in the future a
/// normalised bookmark date may lie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct DateRange {
    pub amount: u32,
    pub unit: RangeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DateRange {
    pub fn new(amount: u32, unit: RangeUnit) -> Self {
        Self { amount, unit }
    }

    /// The latest acceptable instant: `now` plus this range. Saturates at the
    /// largest representable date.
    pub fn ceiling(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let amount = i64::from(self.amount);
        let ceiling = match self.unit {
            RangeUnit::Seconds => TimeDelta::try_seconds(amount).and_then(|d| now.checked_add_signed(d)),
            RangeUnit::Minutes => TimeDelta::try_minutes(amount).and_then(|d| now.checked_add_signed(d)),
            RangeUnit::Hours => TimeDelta::try_hours(amount).and_then(|d| now.checked_add_signed(d)),
            RangeUnit::Days => TimeDelta::try_days(amount).and_then(|d| now.checked_add_signed(d)),
            RangeUnit::Weeks => TimeDelta::try_weeks(amount).and_then(|d| now.checked_add_signed(d)),
            RangeUnit::Months => now.checked_add_months(Months::new(self.amount)),
            RangeUnit::Years => self
                .amount
                .checked_mul(12)
                .and_then(|months| now.checked_add_months(Months::new(months))),
        };
        ceiling.unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new(30, RangeUnit::Years)
    }
}

impl FromStr for DateRange {
    type Err = BookmarkError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| BookmarkError::InvalidDateRange {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let mut parts = trimmed.split_whitespace();
        let (Some(amount), Some(unit), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected \"<amount> <unit>\", e.g. \"30 years\""));
        };

        let amount: u32 = amount
            .parse()
            .map_err(|_| invalid("amount must be a non-negative whole number"))?;

        let unit = match unit.to_ascii_lowercase().as_str() {
            "sec" | "secs" | "second" | "seconds" => RangeUnit::Seconds,
            "min" | "mins" | "minute" | "minutes" => RangeUnit::Minutes,
            "hour" | "hours" => RangeUnit::Hours,
            "day" | "days" => RangeUnit::Days,
            "week" | "weeks" => RangeUnit::Weeks,
            "month" | "months" => RangeUnit::Months,
            "year" | "years" => RangeUnit::Years,
            _ => return Err(invalid("unknown unit")),
        };

        Ok(Self::new(amount, unit))
    }
}

impl TryFrom<String> for DateRange {
    type Error = BookmarkError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = match self.unit {
            RangeUnit::Seconds => "seconds",
            RangeUnit::Minutes => "minutes",
            RangeUnit::Hours => "hours",
            RangeUnit::Days => "days",
            RangeUnit::Weeks => "weeks",
            RangeUnit::Months => "months",
            RangeUnit::Years => "years",
        };
        write!(f, "{} {}", self.amount, unit)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("nbparse")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
