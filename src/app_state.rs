use crate::{
    config::FetchConfig,
    fetcher::{FetchError, HttpFetcher, PageFetcher},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
}

impl AppState {
    pub fn new(fetch_config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: Arc::new(HttpFetcher::new(fetch_config)?),
        })
    }
}
