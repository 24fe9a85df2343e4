//! Service URL construction
//!
//! Builds absolute URLs below the server's public base URL. Paths are joined
//! segment by segment so that a base URL with or without a trailing slash
//! produces the same result.

use crate::error::Result;
use url::Url;

/// Join path components with single slashes, dropping empty components
/// and stray slashes at the joints.
pub fn append_path<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref().trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build an absolute URL for `path` below `base_url`, with optional query
/// parameters appended in the given order.
pub fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> Result<Url> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.set_query(None);
    base.set_fragment(None);

    let mut url = base.join(path.trim_start_matches('/'))?;
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// URL of a catalog resource: `<base>/rest/<prefix>/<name>`
pub fn resource_url(base_url: &str, prefix: &str, local_name: &str) -> Result<Url> {
    build_url(base_url, &append_path(&["rest", prefix, local_name]), &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_append_path() {
        assert_eq!(append_path(&["rest", "topp", "states"]), "rest/topp/states");
        assert_eq!(append_path(&["/rest/", "", "/topp"]), "rest/topp");
        assert_eq!(append_path::<&str>(&[]), "");
    }

    #[test_case("http://localhost:8080/geo" ; "no trailing slash")]
    #[test_case("http://localhost:8080/geo/" ; "trailing slash")]
    #[test_case("http://localhost:8080/geo?x=1" ; "base query dropped")]
    fn test_build_url_joins_below_base(base: &str) {
        let url = build_url(base, "wfs3", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/geo/wfs3");
    }

    #[test]
    fn test_build_url_with_params() {
        let url = build_url(
            "http://example.com",
            "/rest/topp/states.kml",
            &[("startindex", "10".to_string()), ("maxfeatures", "5".to_string())],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://example.com/rest/topp/states.kml?startindex=10&maxfeatures=5"
        );
    }

    #[test]
    fn test_resource_url() {
        let url = resource_url("https://maps.example.org/geoserver", "topp", "states").unwrap();
        assert_eq!(url.as_str(), "https://maps.example.org/geoserver/rest/topp/states");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(build_url("not a url", "wfs3", &[]).is_err());
    }
}
