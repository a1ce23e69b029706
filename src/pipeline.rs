use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::extractors::{Extractor, WikiTableExtractor};
use crate::fetchers::Fetch;
use crate::model::Record;
use crate::normalizer::normalize;
use crate::store::Store;
use log::{error, info, warn};
use rand::Rng;

/// Outcome of building the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generated {
    /// Records written
    pub records: usize,
    /// Whether an existing store was replaced
    pub overwritten: bool,
}

/// Fetch the list page and turn its table into records
///
/// This pipeline:
/// 1. Fetches the wiki source of `config.source_url`
/// 2. Extracts the ten-cell rows of the Pokémon table
/// 3. Normalizes them into records with absolute sprite URLs
pub fn fetch_records(
    config: &PickerConfig,
    fetcher: &dyn Fetch,
) -> Result<Vec<Record>, PickerError> {
    let document = fetcher.fetch(&config.source_url)?;
    let rows = WikiTableExtractor.extract(&document)?;
    let records = normalize(rows, &config.sprite_base_url);

    if records.is_empty() {
        warn!("No Pokémon rows found at {}", config.source_url);
    }
    Ok(records)
}

/// Fetch the records and write them to the configured store
pub fn generate(config: &PickerConfig, fetcher: &dyn Fetch) -> Result<Generated, PickerError> {
    let records = fetch_records(config, fetcher)?;
    let overwritten = Store::new(&config.store_path).write(&records)?;

    Ok(Generated {
        records: records.len(),
        overwritten,
    })
}

/// Pick a random record from `store`
///
/// A missing store is reported and yields `Ok(None)`; every other failure is
/// returned as an error.
pub fn pick<R: Rng>(store: &Store, rng: &mut R) -> Result<Option<Record>, PickerError> {
    match store.pick_random(rng) {
        Ok(record) => Ok(Some(record)),
        Err(PickerError::StoreNotFound(path)) => {
            error!("Store {} does not exist", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Build the store if it is missing, then pick a random record from it
pub fn run<R: Rng>(
    config: &PickerConfig,
    fetcher: &dyn Fetch,
    rng: &mut R,
) -> Result<Option<Record>, PickerError> {
    let store = Store::new(&config.store_path);

    if !store.exists() {
        info!("No store at {}, generating", store.path().display());
        let generated = generate(config, fetcher)?;
        info!("Generated {} records", generated.records);
    }

    pick(&store, rng)
}
