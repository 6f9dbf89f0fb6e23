use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIGURATION_SERVICE_URL: &str = "configuration-service:8080";
pub const DEFAULT_EVENT_BROKER_URL: &str = "http://event-broker.keptn.svc.cluster.local/keptn";
pub const DEFAULT_SCHEME: &str = "http";

/// The (project, stage, service) triple that scopes every remote lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCoordinate {
    pub project: String,
    pub stage: String,
    pub service: String,
}

impl ResourceCoordinate {
    pub fn new(
        project: impl Into<String>,
        stage: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            stage: stage.into(),
            service: service.into(),
        }
    }
}

/// Resolver options, loaded from `~/.config/resmirror/config.toml` and
/// overridable from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Read resources from disk only; never contact the configuration service.
    pub use_local_file_system: bool,
    /// Host (and port) of the configuration service, e.g. `configuration-service:8080`.
    pub configuration_service_url: String,
    /// Event broker URL. Not used for resolution; carried for callers that publish events.
    pub event_broker_url: String,
    /// Scheme used when `configuration_service_url` has none.
    pub scheme: String,
    /// Name of the auth header sent with every request (e.g. `x-token`).
    pub auth_header: Option<String>,
    /// Value of the auth header.
    pub auth_token: Option<String>,
    /// Directory resource paths are mirrored under. None = current working directory.
    pub root_dir: Option<PathBuf>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            use_local_file_system: false,
            configuration_service_url: DEFAULT_CONFIGURATION_SERVICE_URL.to_string(),
            event_broker_url: DEFAULT_EVENT_BROKER_URL.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            auth_header: None,
            auth_token: None,
            root_dir: None,
        }
    }
}

impl ResolverOptions {
    /// Configuration service address; an empty value falls back to the default.
    pub fn configuration_service_url(&self) -> &str {
        non_empty_or(&self.configuration_service_url, DEFAULT_CONFIGURATION_SERVICE_URL)
    }

    /// Event broker address; an empty value falls back to the default.
    pub fn event_broker_url(&self) -> &str {
        non_empty_or(&self.event_broker_url, DEFAULT_EVENT_BROKER_URL)
    }

    pub fn scheme(&self) -> &str {
        non_empty_or(&self.scheme, DEFAULT_SCHEME)
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("resmirror")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ResolverOptions> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ResolverOptions::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from `path`; a missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<ResolverOptions> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ResolverOptions::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read config {}", path.display()))
        }
    };
    let cfg: ResolverOptions = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Read-only load: use the config file if one exists, never create it.
///
/// When the XDG directories cannot be determined, falls back to defaults
/// with a warning. A present but unreadable or invalid file is an error.
pub fn load_or_default() -> Result<ResolverOptions> {
    let xdg_dirs = match xdg::BaseDirectories::with_prefix("resmirror") {
        Ok(dirs) => dirs,
        Err(e) => {
            tracing::warn!("config directory unavailable, using defaults: {}", e);
            return Ok(ResolverOptions::default());
        }
    };
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_from(&path),
        None => Ok(ResolverOptions::default()),
    }
}
