//! # Configuration
//!
//! Startup defaults for the tip screen.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --locale de-DE  --rate 18  --round-up / --no-round-up              │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TIPTIME_LOCALE=de-DE                                               │
//! │     TIPTIME_DEFAULT_RATE=18                                            │
//! │     TIPTIME_ROUND_UP=true                                              │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/tiptime/tiptime.toml (Linux)                             │
//! │     ~/Library/Application Support/com.tiptime.tiptime/tiptime.toml     │
//! │                                                                         │
//! │  4. System locale (LC_ALL, LC_MONETARY, LANG), locale only             │
//! │                                                                         │
//! │  5. Default Values (lowest priority)                                   │
//! │     en-US, 15%, no round-up                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tiptime.toml
//! locale = "en-GB"
//! default_rate = 18   # 20 | 18 | 15
//! round_up = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tiptime_core::{CurrencyFormat, TipRate, DEFAULT_LOCALE};
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::error::{AppError, AppResult};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "tiptime.toml";

/// System variables consulted for the locale, in order.
const SYSTEM_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

// =============================================================================
// App Config
// =============================================================================

/// Persistent user preferences for the tip screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Locale tag for currency formatting (e.g. "en-US").
    /// `None` means "follow the system locale".
    #[serde(default)]
    pub locale: Option<String>,

    /// Tip option selected at startup, as a whole percentage.
    #[serde(default = "default_rate_percent")]
    pub default_rate: u32,

    /// Initial position of the round-up switch.
    #[serde(default)]
    pub round_up: bool,
}

fn default_rate_percent() -> u32 {
    TipRate::default().percent()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            locale: None,
            default_rate: default_rate_percent(),
            round_up: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses one TOML file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks that every value names something the screen offers.
    pub fn validate(&self) -> AppResult<()> {
        TipRate::from_percent(self.default_rate).map_err(|_| {
            AppError::InvalidConfig(format!(
                "default_rate must be 20, 18 or 15 (got {})",
                self.default_rate
            ))
        })?;

        if let Some(locale) = &self.locale {
            CurrencyFormat::try_for_locale(locale)
                .map_err(|e| AppError::InvalidConfig(e.to_string()))?;
        }

        Ok(())
    }

    /// The startup tip option.
    pub fn rate(&self) -> TipRate {
        TipRate::from_percent(self.default_rate).unwrap_or_default()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies `TIPTIME_*` overrides from a variable lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(locale) = lookup("TIPTIME_LOCALE") {
            self.locale = Some(locale);
        }

        if let Some(rate) = lookup("TIPTIME_DEFAULT_RATE") {
            match rate.parse::<TipRate>() {
                Ok(rate) => self.default_rate = rate.percent(),
                Err(e) => warn!(%rate, "Ignoring TIPTIME_DEFAULT_RATE: {}", e),
            }
        }

        if let Some(flag) = lookup("TIPTIME_ROUND_UP") {
            match parse_flag(&flag) {
                Some(round_up) => self.round_up = round_up,
                None => warn!(%flag, "Ignoring TIPTIME_ROUND_UP: expected true or false"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tiptime", "tiptime")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

/// Parses an on/off word (`true`, `on`, `yes`, `1` and their opposites).
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Effective startup state of the screen after all sources are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: CurrencyFormat,
    pub rate: TipRate,
    pub round_up: bool,
}

impl Settings {
    /// Merges flags, loaded config and the system locale.
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Self {
        Self::resolve_with(cli, config, |key| std::env::var(key).ok())
    }

    /// Same as [`Settings::resolve`] with an explicit variable lookup.
    pub fn resolve_with(
        cli: &Cli,
        config: &AppConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let locale = cli
            .locale
            .clone()
            .or_else(|| config.locale.clone())
            .or_else(|| system_locale(&lookup))
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let format = match CurrencyFormat::try_for_locale(&locale) {
            Ok(format) => format,
            Err(e) => {
                warn!("{}; formatting as {}", e, DEFAULT_LOCALE);
                CurrencyFormat::default()
            }
        };
        debug!(locale = %format.locale, currency = %format.currency_code, "Currency format resolved");

        let round_up = if cli.round_up {
            true
        } else if cli.no_round_up {
            false
        } else {
            config.round_up
        };

        Settings {
            format,
            rate: cli.rate.unwrap_or_else(|| config.rate()),
            round_up,
        }
    }
}

fn system_locale(lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    SYSTEM_LOCALE_VARS
        .iter()
        .filter_map(|key| lookup(*key))
        .find(|value| !value.trim().is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================
