//! Optional run configuration (`kitacal.toml`).
//!
//! Every field has a default, so an empty or absent file yields the
//! same output as the built-in constants.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KitacalError, KitacalResult};

/// Looked up in the working directory when no `--config` is given.
pub static DEFAULT_CONFIG_FILE: &str = "kitacal.toml";

static DEFAULT_PROD_ID: &str = "-//Idsteiner Waldorfkindergarten//Calendar//DE";
static DEFAULT_LOCATION: &str = "Idsteiner Waldorfkindergarten";
static DEFAULT_UID_DOMAIN: &str = "idsteiner-waldorf.de";
static DEFAULT_SHEET_NAME: &str = "Kindergarten Calendar";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ics: IcsSettings,
    pub xlsx: XlsxSettings,
}

/// How timed (non all-day) events are written to `DTSTART`/`DTEND`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimedEventStyle {
    /// Wall-clock time with a literal `Z` appended.
    #[default]
    UtcSuffix,
    /// Wall-clock time without suffix (floating time).
    Floating,
    /// Wall-clock time with a `TZID` parameter set to the calendar timezone.
    Tzid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcsSettings {
    pub prod_id: String,
    pub location: String,
    pub uid_domain: String,
    pub timed_events: TimedEventStyle,
    /// Fold content lines longer than 75 octets
    pub fold_lines: bool,
}

impl Default for IcsSettings {
    fn default() -> Self {
        IcsSettings {
            prod_id: DEFAULT_PROD_ID.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            timed_events: TimedEventStyle::default(),
            fold_lines: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XlsxSettings {
    pub sheet_name: String,
}

impl Default for XlsxSettings {
    fn default() -> Self {
        XlsxSettings {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> KitacalResult<Self> {
        toml::from_str(contents).map_err(|e| KitacalError::Config(e.to_string()))
    }

    /// Load a config file that must exist.
    pub fn load_from(path: &Path) -> KitacalResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            KitacalError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| KitacalError::Config(format!("{}: {e}", path.display())))
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Otherwise `kitacal.toml` in `dir` is used
    /// when present, and the defaults when not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> KitacalResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let implicit: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if implicit.exists() {
            log::debug!("Using config file {}", implicit.display());
            Self::load_from(&implicit)
        } else {
            Ok(Config::default())
        }
    }
}
