use crate::error::PickerError;

mod request;

pub use self::request::RequestFetcher;

/// Source of the raw wiki text.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, PickerError>;
}
