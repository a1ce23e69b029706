pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod normalizer;
pub mod pipeline;
pub mod store;

pub use builder::{PokePicker, PokePickerBuilder};
pub use config::PickerConfig;
pub use error::PickerError;
pub use model::Record;
pub use store::Store;

/// Pick a random Pokémon, downloading the list first if there is no store yet.
///
/// Returns `Ok(None)` when the store cannot be read after all.
pub fn pick_pokemon(config: &PickerConfig) -> Result<Option<Record>, PickerError> {
    PokePicker::builder()
        .config(config.clone())
        .build()?
        .run(&mut rand::rng())
}
