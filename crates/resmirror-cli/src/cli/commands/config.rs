//! `resmirror config` – print config location and effective options.

use anyhow::Result;
use resmirror_core::config::{self, ResolverOptions};

pub fn run_config(cfg: &ResolverOptions) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    println!("use_local_file_system: {}", cfg.use_local_file_system);
    println!("configuration_service_url: {}", cfg.configuration_service_url());
    println!("event_broker_url: {}", cfg.event_broker_url());
    println!("scheme: {}", cfg.scheme());
    println!(
        "auth_header: {}",
        cfg.auth_header.as_deref().unwrap_or("(none)")
    );
    match &cfg.root_dir {
        Some(dir) => println!("root_dir: {}", dir.display()),
        None => println!("root_dir: (current directory)"),
    }
    Ok(())
}
