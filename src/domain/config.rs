use std::{num::NonZeroU32, path::Path};

use serde::{Deserialize, Serialize};

/// Presentation and retry settings for a session.
///
/// None of these settings change how a roster validates names or how a
/// single draw is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// How many shuffles a single draw request may use.
    ///
    /// With the default of 1, a shuffle that pairs someone with themself is
    /// reported straight back and the user decides to draw again.
    max_attempts: NonZeroU32,

    /// Whether the interactive prompt reprints the roster after every
    /// successful add or reset.
    pub echo_roster: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            echo_roster: true,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the configuration from `path` if it exists, falling back to the
    /// defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Returns the number of shuffles allowed per draw request.
    #[must_use]
    pub const fn max_attempts(&self) -> NonZeroU32 {
        self.max_attempts
    }

    /// Sets the number of shuffles allowed per draw request.
    pub const fn set_max_attempts(&mut self, attempts: NonZeroU32) {
        self.max_attempts = attempts;
    }
}

const fn default_max_attempts() -> NonZeroU32 {
    NonZeroU32::MIN
}

const fn default_echo_roster() -> bool {
    true
}

/// Errors raised while loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    /// The file is not a valid configuration.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The serialized versions of the configuration.
/// This allows the file format and the domain type to evolve separately.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_max_attempts")]
        max_attempts: NonZeroU32,

        #[serde(default = "default_echo_roster")]
        echo_roster: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                max_attempts,
                echo_roster,
            } => Self {
                max_attempts,
                echo_roster,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            max_attempts: config.max_attempts,
            echo_roster: config.echo_roster,
        }
    }
}
