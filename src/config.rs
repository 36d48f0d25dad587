use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Path of the binary database file.
    #[serde(default = "default_database")]
    pub database: String,
    /// Start from the sample catalogue when the database cannot be loaded.
    #[serde(default = "default_seed")]
    pub seed: bool,
    /// How many entries similarity rankings and recommendations return.
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            seed: default_seed(),
            similar_limit: default_similar_limit(),
        }
    }
}

fn default_database() -> String {
    "movies_database.dat".to_string()
}

fn default_seed() -> bool {
    true
}

fn default_similar_limit() -> usize {
    5
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    /// Read `path` when one was given, otherwise fall back to the defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}
