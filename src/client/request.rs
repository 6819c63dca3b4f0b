//! Request URL construction.

use url::Url;

use crate::config::{PARAM_API_KEY, PARAM_DOMAIN, PARAM_REQUEST};

/// Builds the URL for a single WhoAPI query.
///
/// The query string always carries exactly three parameters: `apikey`, `r`
/// and `domain`. `domain` is sent even when empty since some request types
/// (e.g. `myaccount`) don't use it.
pub fn build_request_url(base_url: &Url, api_key: &str, request: &str, domain: &str) -> Url {
    let mut url = base_url.clone();
    url.query_pairs_mut()
        .append_pair(PARAM_API_KEY, api_key)
        .append_pair(PARAM_REQUEST, request)
        .append_pair(PARAM_DOMAIN, domain);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    fn base() -> Url {
        Url::parse(DEFAULT_BASE_URL).unwrap()
    }

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_build_request_url_three_params() {
        let url = build_request_url(&base(), "k3y", "whois", "whoapi.com");
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("api.whoapi.com"));
        assert_eq!(
            pairs(&url),
            vec![
                ("apikey".to_string(), "k3y".to_string()),
                ("r".to_string(), "whois".to_string()),
                ("domain".to_string(), "whoapi.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_request_url_keeps_empty_domain() {
        let url = build_request_url(&base(), "k3y", "myaccount", "");
        let pairs = pairs(&url);
        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&("domain".to_string(), String::new())));
        assert!(url.query().unwrap_or_default().contains("domain="));
    }

    #[test]
    fn test_build_request_url_encodes_values() {
        let url = build_request_url(&base(), "a&b=c", "whois", "exämple.com");
        let pairs = pairs(&url);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("apikey".to_string(), "a&b=c".to_string()));
        assert_eq!(pairs[2], ("domain".to_string(), "exämple.com".to_string()));
    }

    #[test]
    fn test_build_request_url_does_not_touch_base() {
        let base = Url::parse("http://127.0.0.1:8080/api").unwrap();
        let url = build_request_url(&base, "k", "cert", "google.com");
        assert_eq!(base.query(), None);
        assert_eq!(url.path(), "/api");
        assert_eq!(url.query(), Some("apikey=k&r=cert&domain=google.com"));
    }
}
