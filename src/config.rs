use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for one picker run
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PickerConfig {
    /// Wiki export page holding the Pokémon list
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Prefix for sprite URLs; the number and `.png` are appended verbatim
    #[serde(default = "default_sprite_base_url")]
    pub sprite_base_url: String,
    /// Location of the store file
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            sprite_base_url: default_sprite_base_url(),
            store_path: default_store_path(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_source_url() -> String {
    "http://pokewiki.de/Spezial:Exportieren/Pok%C3%A9mon-Liste".to_string()
}

fn default_sprite_base_url() -> String {
    "http://www.greenchu.de/sprites/bw/".to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from("pokemons.csv")
}

fn default_timeout() -> u64 {
    30
}

impl PickerConfig {
    /// Load configuration from `pokepicker.toml` in the current directory
    ///
    /// A missing file is fine; every setting has a default.
    pub fn load() -> Result<Self, ConfigError> {
        load_config("pokepicker")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from the named file (extension optional)
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. The config file, if present
/// 2. Default values
pub fn load_config(name: &str) -> Result<PickerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(name).required(false))
        .build()?;

    let config: PickerConfig = settings.try_deserialize()?;
    if config.timeout == 0 {
        return Err(ConfigError::Message(
            "timeout must be greater than zero".to_string(),
        ));
    }
    Ok(config)
}
