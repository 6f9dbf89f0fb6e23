//! Error types for resource fetching and resolution.

use std::io;
use std::path::PathBuf;

/// Error returned by a single configuration-service request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The base URL (plus scheme) does not form a valid URL.
    #[error("invalid configuration service URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// Transport failure or a non-2xx status other than 404.
    #[error("configuration service unavailable at {url}: {reason}")]
    RemoteUnavailable { url: String, reason: String },
    /// The service answered 404 for the requested resource.
    #[error("resource not found at {url}")]
    ResourceNotFound { url: String },
    /// The response body was not a valid resource envelope.
    #[error("malformed resource response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned by [`crate::resolver::ResourceResolver::resolve`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Remote fetch failed, or returned no content. Nothing was written.
    #[error("resource {path} unavailable: {reason}")]
    ResourceUnavailable {
        path: String,
        reason: String,
        #[source]
        source: Option<FetchError>,
    },
    /// Local mode: nothing exists at the resource path.
    #[error("resource {} not found on local filesystem: {source}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Removing the stale entry, creating directories, or writing the file failed.
    #[error("failed to write resource to {}: {source}", .path.display())]
    LocalWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ResolveError {
    /// The underlying fetch error, if this failure came from the remote service.
    pub fn fetch_error(&self) -> Option<&FetchError> {
        match self {
            ResolveError::ResourceUnavailable { source, .. } => source.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn unavailable_exposes_fetch_source() {
        let err = ResolveError::ResourceUnavailable {
            path: "shipyard.yaml".to_string(),
            reason: "HTTP 500".to_string(),
            source: Some(FetchError::RemoteUnavailable {
                url: "http://cs/x".to_string(),
                reason: "HTTP 500".to_string(),
            }),
        };
        assert!(matches!(
            err.fetch_error(),
            Some(FetchError::RemoteUnavailable { .. })
        ));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("shipyard.yaml"));
    }

    #[test]
    fn empty_content_has_no_source() {
        let err = ResolveError::ResourceUnavailable {
            path: "a.yaml".to_string(),
            reason: "empty resource content".to_string(),
            source: None,
        };
        assert!(err.fetch_error().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn local_write_display_includes_path() {
        let err = ResolveError::LocalWrite {
            path: PathBuf::from("jmeter/load.jmx"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("jmeter/load.jmx"));
        assert!(msg.contains("denied"));
    }
}
