//! Resource envelope returned by the configuration service.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A resource as returned by the configuration service. Content is opaque and
/// is written to disk verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "resourceContent")]
    pub resource_content: String,
    #[serde(rename = "resourceURI", default, skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
}

impl Resource {
    pub fn is_empty(&self) -> bool {
        self.resource_content.is_empty()
    }
}

/// Decode a response body into a [`Resource`].
pub(crate) fn decode(url: &str, body: &[u8]) -> Result<Resource, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
