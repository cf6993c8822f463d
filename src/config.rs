use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(default)]
    pub apikey: Option<String>,
    #[serde(default = "default_tmdb_base")]
    pub baseurl: String,
    #[serde(alias = "posterbase", rename = "posterbase")]
    #[serde(default = "default_poster_base")]
    pub poster_base: String,
    #[serde(alias = "backdropbase", rename = "backdropbase")]
    #[serde(default = "default_backdrop_base")]
    pub backdrop_base: String,
    #[serde(alias = "profilebase", rename = "profilebase")]
    #[serde(default = "default_profile_base")]
    pub profile_base: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            apikey: None,
            baseurl: default_tmdb_base(),
            poster_base: default_poster_base(),
            backdrop_base: default_backdrop_base(),
            profile_base: default_profile_base(),
        }
    }
}

impl TmdbConfig {
    /// The `TMDB_API_KEY` environment variable wins over the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var("TMDB_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.apikey.clone())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub sqlite: Option<SqliteConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    pub filename: String,
}

fn default_port() -> String {
    "3000".to_string()
}

fn default_tmdb_base() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_poster_base() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_backdrop_base() -> String {
    "https://image.tmdb.org/t/p/original".to_string()
}

fn default_profile_base() -> String {
    "https://image.tmdb.org/t/p/w185".to_string()
}

impl Config {
    /// Loads the YAML config file. A missing file is not an error: every
    /// setting has a default and the API key can come from the environment.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        if !std::path::Path::new(path).exists() {
            return Ok(Config::default());
        }
        Self::from_file(path)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    pub fn database_path(&self) -> String {
        if let Some(ref sqlite) = self.database.sqlite {
            return sqlite.filename.clone();
        }
        "movies.db".to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}
