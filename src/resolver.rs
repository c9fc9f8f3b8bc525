// src/resolver.rs
//
// URL → ProfileReference. One GET, one meta lookup, no retries.
use crate::{
    config::{consts::ID_META_PROPERTY, options::ResolveOptions},
    core::{html, net::HttpFetcher},
    error::ResolveError,
    profile::{self, ProfileReference},
};

/// Source of page HTML. The production impl is a blocking HTTP client.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, ResolveError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<String, ResolveError> {
        (**self).get(url)
    }
}

pub struct Resolver<F: Fetch> {
    fetcher: F,
    domain: String,
}

impl Resolver<HttpFetcher> {
    /// Resolver backed by a real HTTP client built from `opts`.
    pub fn http(opts: &ResolveOptions) -> Result<Self, ResolveError> {
        Ok(Self::with_fetcher(HttpFetcher::new(opts)?, &opts.domain))
    }
}

impl<F: Fetch> Resolver<F> {
    pub fn with_fetcher(fetcher: F, domain: &str) -> Self {
        Self { fetcher, domain: s!(domain) }
    }

    pub fn resolve(&self, input: &str) -> Result<ProfileReference, ResolveError> {
        // Validation happens before any network traffic.
        let url = profile::normalize(input, &self.domain)?;
        logf!("Resolve: GET {}", url);

        let page = self.fetcher.get(url.as_str())?;
        let identifier = extract_identifier(&page)?;

        let profile = ProfileReference::new(input, &url, identifier);
        logf!(
            "Resolve: OK username={:?} id={}",
            profile.username(),
            profile.identifier()
        );
        Ok(profile)
    }
}

/// Identifier from the `al:ios:url` meta tag; anything but a digit string is NotFound.
pub fn extract_identifier(page: &str) -> Result<String, ResolveError> {
    let Some(content) = html::meta_content(page, ID_META_PROPERTY) else {
        logd!("Resolve: no {} meta in {} bytes of HTML", ID_META_PROPERTY, page.len());
        return Err(ResolveError::NotFound);
    };

    let id = html::trailing_segment(&content);
    if !html::is_numeric_id(id) {
        logd!("Resolve: {} content {:?} has no numeric id", ID_META_PROPERTY, content);
        return Err(ResolveError::NotFound);
    }
    Ok(s!(id))
}

/// Resolve with a fresh HTTP client.
pub fn resolve(input: &str, opts: &ResolveOptions) -> Result<ProfileReference, ResolveError> {
    Resolver::http(opts)?.resolve(input)
}
