pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod handler;
pub mod resolver;

pub use config::{ResolverOptions, ResourceCoordinate};
pub use error::{FetchError, ResolveError};
pub use handler::{Resource, ResourceHandler, ResourceSource};
pub use resolver::ResourceResolver;
