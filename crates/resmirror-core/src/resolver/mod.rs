//! Resource resolution: turn a logical resource path into a local file.
//!
//! In local mode the resource must already exist on disk. Otherwise it is
//! fetched from the configuration service and mirrored to the same relative
//! path, replacing whatever was there. Either way the caller gets back a path
//! it can open directly.

mod local;
mod materialize;

use std::path::PathBuf;

use crate::config::{ResolverOptions, ResourceCoordinate};
use crate::error::ResolveError;
use crate::handler::{ResourceHandler, ResourceSource};

/// Resolves resources for one coordinate. Immutable after construction.
///
/// Calls are synchronous and independent. Two concurrent calls for the same
/// path are not serialized.
#[derive(Debug, Clone)]
pub struct ResourceResolver<S = ResourceHandler> {
    coordinate: ResourceCoordinate,
    options: ResolverOptions,
    context: Option<String>,
    source: S,
}

impl ResourceResolver<ResourceHandler> {
    /// Resolver backed by an HTTP [`ResourceHandler`] built from `options`.
    pub fn new(coordinate: ResourceCoordinate, options: ResolverOptions) -> Self {
        let handler = ResourceHandler::from_options(&options);
        Self::with_source(coordinate, options, handler)
    }
}

impl<S: ResourceSource> ResourceResolver<S> {
    pub fn with_source(coordinate: ResourceCoordinate, options: ResolverOptions, source: S) -> Self {
        Self {
            coordinate,
            options,
            context: None,
            source,
        }
    }

    /// Attach a correlation id (e.g. the triggering event's context) to log output.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn coordinate(&self) -> &ResourceCoordinate {
        &self.coordinate
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn event_broker_url(&self) -> &str {
        self.options.event_broker_url()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Local path a resource is mirrored to: under `root_dir` when set, else verbatim.
    pub fn local_path(&self, resource_path: &str) -> PathBuf {
        match &self.options.root_dir {
            Some(root) => root.join(resource_path),
            None => PathBuf::from(resource_path),
        }
    }

    /// Resolve `resource_path` to a local file.
    ///
    /// Remote mode fetches the resource and writes it to [`Self::local_path`].
    /// A failed fetch or empty content is `ResourceUnavailable` and touches
    /// nothing on disk. Local mode never contacts the service and only checks
    /// that the path exists.
    pub fn resolve(&self, resource_path: &str) -> Result<PathBuf, ResolveError> {
        let _span = tracing::debug_span!(
            "resolve",
            resource = resource_path,
            project = %self.coordinate.project,
            stage = %self.coordinate.stage,
            service = %self.coordinate.service,
            context = self.context.as_deref().unwrap_or(""),
        )
        .entered();

        let target = self.local_path(resource_path);

        if self.options.use_local_file_system {
            local::verify_present(&target)?;
            tracing::debug!("using local resource {}", target.display());
            return Ok(target);
        }

        let resource = self
            .source
            .get_service_resource(&self.coordinate, resource_path)
            .map_err(|e| {
                tracing::warn!("resource {} not retrieved: {}", resource_path, e);
                ResolveError::ResourceUnavailable {
                    path: resource_path.to_string(),
                    reason: "configuration service request failed".to_string(),
                    source: Some(e),
                }
            })?;

        if resource.is_empty() {
            tracing::warn!("resource {} has no content", resource_path);
            return Err(ResolveError::ResourceUnavailable {
                path: resource_path.to_string(),
                reason: "empty resource content".to_string(),
                source: None,
            });
        }

        materialize::materialize(&target, resource.resource_content.as_bytes())?;
        tracing::debug!(
            bytes = resource.resource_content.len(),
            "resource written to {}",
            target.display()
        );
        Ok(target)
    }

    /// Resolve several paths in order, stopping at the first failure.
    pub fn resolve_all<I, P>(&self, resource_paths: I) -> Result<Vec<PathBuf>, ResolveError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        resource_paths
            .into_iter()
            .map(|p| self.resolve(p.as_ref()))
            .collect()
    }
}
