use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;

use crate::{
    fetchers::{Fetch, RequestFetcher},
    pipeline::{self, Generated},
    store::Store,
    PickerConfig, PickerError, Record,
};

/// Builder for configuring a [`PokePicker`]
#[derive(Default)]
pub struct PokePickerBuilder {
    config: PickerConfig,
    timeout: Option<Duration>,
    fetcher: Option<Box<dyn Fetch>>,
}

impl PokePickerBuilder {
    /// Start from an already loaded configuration
    ///
    /// # Example
    /// ```
    /// use pokepicker::{PickerConfig, PokePicker};
    ///
    /// let builder = PokePicker::builder().config(PickerConfig::default());
    /// ```
    pub fn config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the wiki page the Pokémon list is fetched from
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.config.source_url = url.into();
        self
    }

    /// Set the prefix of generated sprite URLs
    ///
    /// The number and `.png` are appended verbatim, so the base should end
    /// with a `/`.
    ///
    /// # Example
    /// ```
    /// use pokepicker::PokePicker;
    ///
    /// let builder = PokePicker::builder()
    ///     .sprite_base_url("https://img.example/sprites/");
    /// ```
    pub fn sprite_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.sprite_base_url = url.into();
        self
    }

    /// Set where the store file lives
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    /// Set a timeout for the HTTP request
    ///
    /// Takes precedence over the `timeout` seconds of the configuration.
    ///
    /// # Example
    /// ```
    /// use pokepicker::PokePicker;
    /// use std::time::Duration;
    ///
    /// let builder = PokePicker::builder()
    ///     .timeout(Duration::from_millis(500));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use a custom source instead of an HTTP request
    pub fn fetcher(mut self, fetcher: impl Fetch + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Validate the settings and build the picker
    ///
    /// # Errors
    /// Returns `PickerError::BuilderError` if the source URL or the store path
    /// is empty or the timeout is zero, or `PickerError::FetchError` if the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<PokePicker, PickerError> {
        if self.config.source_url.trim().is_empty() {
            return Err(PickerError::BuilderError(
                "Source URL cannot be empty".to_string(),
            ));
        }
        if self.config.store_path.as_os_str().is_empty() {
            return Err(PickerError::BuilderError(
                "Store path cannot be empty".to_string(),
            ));
        }

        let timeout = self.timeout.unwrap_or_else(|| self.config.timeout());
        if timeout.is_zero() {
            return Err(PickerError::BuilderError(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        let fetcher: Box<dyn Fetch> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Box::new(RequestFetcher::new(Some(timeout))?),
        };

        Ok(PokePicker {
            store: Store::new(&self.config.store_path),
            config: self.config,
            timeout,
            fetcher,
        })
    }
}

/// Picks random Pokémon from a store built on first use
pub struct PokePicker {
    config: PickerConfig,
    timeout: Duration,
    store: Store,
    fetcher: Box<dyn Fetch>,
}

impl PokePicker {
    /// Creates a new builder with default settings
    ///
    /// # Example
    /// ```
    /// use pokepicker::PokePicker;
    ///
    /// let builder = PokePicker::builder();
    /// ```
    pub fn builder() -> PokePickerBuilder {
        PokePickerBuilder::default()
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Timeout used for the HTTP request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether the store still has to be generated
    pub fn needs_generation(&self) -> bool {
        !self.store.exists()
    }

    /// Fetch the list and (re)write the store
    pub fn generate(&self) -> Result<Generated, PickerError> {
        pipeline::generate(&self.config, &*self.fetcher)
    }

    /// Pick a random record; `Ok(None)` if the store is missing
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Result<Option<Record>, PickerError> {
        pipeline::pick(&self.store, rng)
    }

    /// Generate the store if needed, then pick a random record
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<Option<Record>, PickerError> {
        pipeline::run(&self.config, &*self.fetcher, rng)
    }
}
