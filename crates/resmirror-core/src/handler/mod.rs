//! Configuration-service client.
//!
//! Uses the curl crate (libcurl) to GET a single resource for a
//! project/stage/service coordinate and decode the JSON envelope. One request
//! per call, no retries, no caching.

mod classify;
mod resource;
mod request_url;

pub use resource::Resource;

use std::time::Duration;

use crate::config::{ResolverOptions, ResourceCoordinate};
use crate::error::FetchError;

/// Anything that can fetch a resource for a coordinate.
///
/// [`ResourceHandler`] is the HTTP implementation; the resolver only depends
/// on this trait.
pub trait ResourceSource {
    fn get_service_resource(
        &self,
        coordinate: &ResourceCoordinate,
        resource_path: &str,
    ) -> Result<Resource, FetchError>;
}

impl<S: ResourceSource + ?Sized> ResourceSource for &S {
    fn get_service_resource(
        &self,
        coordinate: &ResourceCoordinate,
        resource_path: &str,
    ) -> Result<Resource, FetchError> {
        (**self).get_service_resource(coordinate, resource_path)
    }
}

/// HTTP client for the configuration service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHandler {
    pub base_url: String,
    pub scheme: String,
    pub auth_header: Option<String>,
    pub auth_token: Option<String>,
}

impl ResourceHandler {
    /// Handler for `base_url` over plain HTTP, without auth.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            scheme: "http".to_string(),
            auth_header: None,
            auth_token: None,
        }
    }

    pub fn from_options(opts: &ResolverOptions) -> Self {
        Self {
            base_url: opts.configuration_service_url().to_string(),
            scheme: opts.scheme().to_string(),
            auth_header: opts.auth_header.clone(),
            auth_token: opts.auth_token.clone(),
        }
    }

    /// Request URL for `resource_path` under `coordinate`.
    pub fn resource_url(
        &self,
        coordinate: &ResourceCoordinate,
        resource_path: &str,
    ) -> Result<String, FetchError> {
        request_url::service_resource_url(&self.scheme, &self.base_url, coordinate, resource_path)
            .map(String::from)
    }

    fn headers(&self) -> Vec<String> {
        let mut headers = vec!["Accept: application/json".to_string()];
        if let (Some(name), Some(token)) = (&self.auth_header, &self.auth_token) {
            if !name.trim().is_empty() {
                headers.push(format!("{}: {}", name.trim(), token.trim()));
            }
        }
        headers
    }

    /// Performs the GET and returns (status, body).
    /// Runs in the current thread.
    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), FetchError> {
        let curl_err = |e: curl::Error| classify::transport_error(url, &e);
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(curl_err)?;
        easy.get(true).map_err(curl_err)?;
        easy.follow_location(true).map_err(curl_err)?;
        easy.max_redirections(10).map_err(curl_err)?;
        easy.connect_timeout(Duration::from_secs(15)).map_err(curl_err)?;
        easy.timeout(Duration::from_secs(30)).map_err(curl_err)?;

        let mut list = curl::easy::List::new();
        for header in self.headers() {
            list.append(&header).map_err(curl_err)?;
        }
        easy.http_headers(list).map_err(curl_err)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(curl_err)?;
            transfer.perform().map_err(curl_err)?;
        }

        let code = easy.response_code().map_err(curl_err)?;
        Ok((code, body))
    }
}

impl ResourceSource for ResourceHandler {
    fn get_service_resource(
        &self,
        coordinate: &ResourceCoordinate,
        resource_path: &str,
    ) -> Result<Resource, FetchError> {
        let url = self.resource_url(coordinate, resource_path)?;
        tracing::debug!(%url, "requesting resource");

        let (code, body) = self.get(&url)?;
        if let Some(err) = classify::classify_status(&url, code) {
            tracing::debug!(%url, code, "configuration service rejected request");
            return Err(err);
        }

        let resource = resource::decode(&url, &body)?;
        tracing::debug!(
            %url,
            bytes = resource.resource_content.len(),
            uri = resource.resource_uri.as_deref().unwrap_or(""),
            "resource received"
        );
        Ok(resource)
    }
}
