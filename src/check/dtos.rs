use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CheckQuery {
    /// Page to analyze.
    pub url: Option<String>,
}

impl CheckQuery {
    /// Returns the URL to fetch, or the client-facing reason it was rejected.
    pub fn validate(&self) -> Result<&str, String> {
        let url = self.url.as_deref().unwrap_or_default();
        if url.is_empty() {
            return Err("URL required".to_string());
        }
        if url.len() > MAX_URL_LENGTH {
            return Err("URL too long".to_string());
        }
        Ok(url)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
