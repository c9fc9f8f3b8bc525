// src/profile.rs
//
// Profile URL handling: normalization, domain check, username derivation.
use url::Url;

use crate::config::consts::USERNAME_SKIP;
use crate::error::ResolveError;

/// A resolved profile. Only built once an identifier was found, so it never
/// holds a placeholder id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileReference {
    raw_input_url: String,
    normalized_url: String,
    username: String,
    identifier: String,
}

impl ProfileReference {
    pub(crate) fn new(raw_input_url: &str, url: &Url, identifier: String) -> Self {
        Self {
            raw_input_url: s!(raw_input_url.trim()),
            normalized_url: s!(url.as_str()),
            username: username_from_path(url.path()),
            identifier,
        }
    }

    /// The URL as the user typed it (trimmed).
    pub fn raw_input_url(&self) -> &str { &self.raw_input_url }
    pub fn normalized_url(&self) -> &str { &self.normalized_url }
    pub fn username(&self) -> &str { &self.username }
    pub fn identifier(&self) -> &str { &self.identifier }
}

/// Prepend `https://` when the input has no http(s) scheme.
pub fn standardize_url(input: &str) -> String {
    let s = input.trim();
    if has_prefix_ci(s, "http://") || has_prefix_ci(s, "https://") {
        s!(s)
    } else {
        join!("https://", s)
    }
}

fn has_prefix_ci(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len()).is_some_and(|p| p.eq_ignore_ascii_case(prefix))
}

/// Trim, standardize, parse, and require the platform domain in the host.
pub fn normalize(input: &str, domain: &str) -> Result<Url, ResolveError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::InvalidUrl(s!("empty URL")));
    }

    let url = Url::parse(&standardize_url(trimmed))
        .map_err(|e| ResolveError::InvalidUrl(format!("{trimmed}: {e}")))?;

    let host = url.host_str().unwrap_or("");
    if !host_matches(host, domain) {
        return Err(ResolveError::InvalidUrl(format!("{trimmed} is not a {domain} URL")));
    }
    Ok(url)
}

/// `facebook.com` and any subdomain of it; case-insensitive.
pub fn host_matches(host: &str, domain: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let domain = domain.trim_matches('.').to_ascii_lowercase();
    if domain.is_empty() {
        return false;
    }
    host == domain || host.ends_with(&join!(".", &domain))
}

/// Last path segment that isn't `profile.php`/`people`; empty when none is left.
/// Query strings are ignored.
pub fn username_from_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.split('/')
        .filter(|p| !p.is_empty() && !USERNAME_SKIP.contains(p))
        .next_back()
        .map(String::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_is_added_once() {
        assert_eq!(standardize_url("www.facebook.com/alice"), "https://www.facebook.com/alice");
        assert_eq!(standardize_url(" http://facebook.com/a "), "http://facebook.com/a");
        assert_eq!(standardize_url("https://m.facebook.com/a"), "https://m.facebook.com/a");
        assert_eq!(standardize_url("HTTPS://www.facebook.com/alice"), "HTTPS://www.facebook.com/alice");
        assert_eq!(standardize_url("Http://facebook.com/a"), "Http://facebook.com/a");
        assert_eq!(standardize_url("https.facebook.com/a"), "https://https.facebook.com/a");
    }

    #[test]
    fn host_must_be_domain_or_subdomain() {
        assert!(host_matches("facebook.com", "facebook.com"));
        assert!(host_matches("www.facebook.com", "facebook.com"));
        assert!(host_matches("M.Facebook.com", "facebook.com"));
        assert!(!host_matches("notfacebook.com", "facebook.com"));
        assert!(!host_matches("facebook.com.evil.net", "facebook.com"));
        assert!(!host_matches("example.com", ""));
    }

    #[test]
    fn normalize_rejects_blank_and_foreign() {
        assert!(matches!(normalize("   ", "facebook.com"), Err(ResolveError::InvalidUrl(_))));
        assert!(matches!(
            normalize("example.com/?q=facebook.com", "facebook.com"),
            Err(ResolveError::InvalidUrl(_))
        ));
        let url = normalize("facebook.com/alice", "facebook.com").unwrap();
        assert_eq!(url.as_str(), "https://facebook.com/alice");
    }

    #[test]
    fn username_rules() {
        assert_eq!(username_from_path("/profile.php?id=123"), "");
        assert_eq!(username_from_path("alice.smith"), "alice.smith");
        assert_eq!(username_from_path("profile.php/alice"), "alice");
        assert_eq!(username_from_path("/people/John.Doe/456"), "456");
        assert_eq!(username_from_path("/alice/"), "alice");
        assert_eq!(username_from_path("/"), "");
    }
}
