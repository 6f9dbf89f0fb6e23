//! Build configuration-service request URLs.

use url::Url;

use crate::config::ResourceCoordinate;
use crate::error::FetchError;

/// Builds `{scheme}://{base}/v1/project/{p}/stage/{s}/service/{v}/resource/{path}`.
///
/// Each part is percent-encoded as a single path segment, so a nested resource
/// path like `jmeter/load.jmx` is sent as `jmeter%2Fload.jmx`. A `base_url` that
/// already carries a scheme is used as-is.
pub(crate) fn service_resource_url(
    scheme: &str,
    base_url: &str,
    coordinate: &ResourceCoordinate,
    resource_path: &str,
) -> Result<Url, FetchError> {
    let base = base_url.trim().trim_end_matches('/');
    let raw = if base.contains("://") {
        base.to_string()
    } else {
        format!("{}://{}", scheme, base)
    };

    let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    url.path_segments_mut()
        .map_err(|()| FetchError::InvalidUrl {
            url: raw.clone(),
            reason: "URL cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .extend([
            "v1",
            "project",
            coordinate.project.as_str(),
            "stage",
            coordinate.stage.as_str(),
            "service",
            coordinate.service.as_str(),
            "resource",
            resource_path,
        ]);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sockshop() -> ResourceCoordinate {
        ResourceCoordinate::new("sockshop", "dev", "carts")
    }

    #[test]
    fn default_host_gets_scheme() {
        let url =
            service_resource_url("http", "configuration-service:8080", &sockshop(), "shipyard.yaml")
                .unwrap();
        assert_eq!(
            url.as_str(),
            "http://configuration-service:8080/v1/project/sockshop/stage/dev/service/carts/resource/shipyard.yaml"
        );
    }

    #[test]
    fn nested_path_is_one_encoded_segment() {
        let url = service_resource_url("http", "cs:8080", &sockshop(), "jmeter/load.jmx").unwrap();
        assert!(url.as_str().ends_with("/resource/jmeter%2Fload.jmx"));
    }

    #[test]
    fn base_with_scheme_and_trailing_slash() {
        let url =
            service_resource_url("http", "https://127.0.0.1:9443/", &sockshop(), "a.yaml").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(
            url.path(),
            "/v1/project/sockshop/stage/dev/service/carts/resource/a.yaml"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let url = service_resource_url("http", "api.example.com/configuration", &sockshop(), "a")
            .unwrap();
        assert_eq!(
            url.path(),
            "/configuration/v1/project/sockshop/stage/dev/service/carts/resource/a"
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = service_resource_url("http", "cs:notaport", &sockshop(), "a").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
