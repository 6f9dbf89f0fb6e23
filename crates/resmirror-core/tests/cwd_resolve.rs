//! Resolution without a root directory mirrors relative to the working
//! directory. Kept in its own test binary because it changes the process CWD.

mod common;

use common::config_server;
use resmirror_core::{ResolverOptions, ResourceCoordinate, ResourceResolver};
use std::path::PathBuf;

#[test]
fn resolves_relative_to_working_directory() {
    let server = config_server::start_resource("test-content", "test-resource.file");
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let opts = ResolverOptions {
        configuration_service_url: server.address.clone(),
        ..ResolverOptions::default()
    };
    let r = ResourceResolver::new(ResourceCoordinate::new("sockshop", "dev", "carts"), opts);

    let got = r.resolve("test-resource.file").expect("resolve");
    assert_eq!(got, PathBuf::from("test-resource.file"));
    assert_eq!(std::fs::read_to_string(&got).unwrap(), "test-content");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("test-resource.file")).unwrap(),
        "test-content"
    );
}
