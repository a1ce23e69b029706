use super::Fetch;
use crate::error::PickerError;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, PickerError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokepicker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetch for RequestFetcher {
    fn fetch(&self, url: &str) -> Result<String, PickerError> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        let text = response.text()?;
        debug!("Fetched {} bytes", text.len());
        Ok(text)
    }
}
