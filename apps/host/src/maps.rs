//! Stand-in for the third-party map SDK: holds the credential handed over at
//! startup. Nothing here talks to a map service.

use tracing::info;

use crate::error::{HostError, Result};

#[derive(Clone)]
pub struct MapServices {
    api_key: String,
}

impl MapServices {
    pub fn provide_api_key(api_key: &str) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(HostError::EmptyApiKey);
        }
        let services = Self {
            api_key: api_key.to_string(),
        };
        info!("map services configured with key {}", services.redacted_key());
        Ok(services)
    }

    /// Last four characters only, for logs.
    pub fn redacted_key(&self) -> String {
        let n = self.api_key.chars().count();
        let tail: String = self.api_key.chars().skip(n.saturating_sub(4)).collect();
        format!("****{tail}")
    }
}

impl std::fmt::Debug for MapServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapServices")
            .field("api_key", &self.redacted_key())
            .finish()
    }
}
