use url::Url;

/// Parse `raw` as a web URL the content surface may load.
///
/// Only `http` and `https` URLs with a host are accepted. Returns the
/// normalized serialization on success.
pub fn parse_web_url(raw: &str) -> Result<String, String> {
    let parsed = Url::parse(raw.trim()).map_err(|e| format!("Invalid URL '{}': {}", raw, e))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(format!("Unsupported scheme '{}' in URL '{}'", other, raw)),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(format!("URL '{}' has no host", raw));
    }
    Ok(parsed.to_string())
}

/// Whether `uri` points into the site rooted at `root` (same scheme, host and
/// a path under the root's path).
#[must_use]
pub fn is_within_site(uri: &str, root: &str) -> bool {
    let (Ok(uri), Ok(root)) = (Url::parse(uri), Url::parse(root)) else {
        return false;
    };
    uri.scheme() == root.scheme()
        && uri.host_str() == root.host_str()
        && uri.port_or_known_default() == root.port_or_known_default()
        && uri.path().starts_with(root.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_web_url_accepts_https() {
        assert_eq!(
            parse_web_url("https://www.nstsdc.org/about").as_deref(),
            Ok("https://www.nstsdc.org/about")
        );
    }

    #[test]
    fn parse_web_url_normalizes_bare_host() {
        assert_eq!(
            parse_web_url("https://www.nstsdc.org").as_deref(),
            Ok("https://www.nstsdc.org/")
        );
    }

    #[test]
    fn parse_web_url_rejects_garbage() {
        assert!(parse_web_url("").is_err());
        assert!(parse_web_url("not a url").is_err());
    }

    #[test]
    fn parse_web_url_rejects_non_web_schemes() {
        let err = parse_web_url("file:///etc/passwd").unwrap_err();
        assert!(err.contains("Unsupported scheme"), "{err}");
        assert!(parse_web_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn is_within_site_matches_sections() {
        assert!(is_within_site(
            "https://www.nstsdc.org/services",
            "https://www.nstsdc.org/"
        ));
        assert!(is_within_site(
            "https://www.nstsdc.org/",
            "https://www.nstsdc.org/"
        ));
    }

    #[test]
    fn is_within_site_rejects_other_hosts_and_schemes() {
        assert!(!is_within_site(
            "https://example.com/",
            "https://www.nstsdc.org/"
        ));
        assert!(!is_within_site(
            "http://www.nstsdc.org/",
            "https://www.nstsdc.org/"
        ));
        assert!(!is_within_site("garbage", "https://www.nstsdc.org/"));
    }
}
