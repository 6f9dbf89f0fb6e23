//! `resmirror get <path>...` – resolve resources and print local paths.

use anyhow::{Context, Result};
use resmirror_core::checksum::{self, ResourceDigest};
use resmirror_core::{ResolverOptions, ResourceCoordinate, ResourceResolver};
use std::path::PathBuf;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub local: bool,
    pub configuration_service_url: Option<String>,
    pub event_broker_url: Option<String>,
    pub scheme: Option<String>,
    pub root: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(self, mut opts: ResolverOptions) -> ResolverOptions {
        if self.local {
            opts.use_local_file_system = true;
        }
        if let Some(url) = self.configuration_service_url {
            opts.configuration_service_url = url;
        }
        if let Some(url) = self.event_broker_url {
            opts.event_broker_url = url;
        }
        if let Some(scheme) = self.scheme {
            opts.scheme = scheme;
        }
        if let Some(root) = self.root {
            opts.root_dir = Some(root);
        }
        opts
    }
}

pub fn run_get(
    opts: ResolverOptions,
    coordinate: ResourceCoordinate,
    paths: &[String],
    context: Option<String>,
    with_checksum: bool,
) -> Result<()> {
    let mut resolver = ResourceResolver::new(coordinate, opts);
    if let Some(ctx) = context {
        resolver = resolver.with_context(ctx);
    }

    for path in paths {
        let local = resolver
            .resolve(path)
            .with_context(|| format!("resolving {}", path))?;
        if with_checksum {
            let digest = checksum::digest_file(&local)?;
            println!("{}", digest_line(&digest));
        } else {
            println!("{}", local.display());
        }
    }
    Ok(())
}

/// `<sha256>  <path>  (<n> bytes)`, sha256sum-style with the size appended.
fn digest_line(digest: &ResourceDigest) -> String {
    format!(
        "{}  {}  ({} bytes)",
        digest.sha256,
        digest.path.display(),
        digest.bytes
    )
}
