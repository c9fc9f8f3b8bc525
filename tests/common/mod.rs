// tests/common/mod.rs
#![allow(dead_code)]

pub mod html_server;

use fb_linkgen::{Fetch, ResolveError};
use std::cell::Cell;

pub const ALICE_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
<title>Alice Smith | Facebook</title>
<meta property="og:title" content="Alice Smith" />
<meta property="al:ios:url" content="fb://profile/1000023" />
<meta property="al:android:url" content="fb://profile/1000023" />
</head><body><div id="root"></div></body></html>"#;

pub const LOGIN_WALL: &str = r#"<!DOCTYPE html>
<html><head><title>Log in to Facebook</title>
<meta property="og:title" content="Facebook" /></head>
<body><form id="login_form"></form></body></html>"#;

/// Serves one canned page and counts calls.
pub struct StubFetcher {
    page: Result<String, ResolveError>,
    pub calls: Cell<usize>,
    pub last_url: Cell<Option<String>>,
}

impl StubFetcher {
    pub fn page(html: &str) -> Self {
        Self { page: Ok(html.to_string()), calls: Cell::new(0), last_url: Cell::new(None) }
    }

    pub fn failing(err: ResolveError) -> Self {
        Self { page: Err(err), calls: Cell::new(0), last_url: Cell::new(None) }
    }
}

impl Fetch for StubFetcher {
    fn get(&self, url: &str) -> Result<String, ResolveError> {
        self.calls.set(self.calls.get() + 1);
        self.last_url.set(Some(url.to_string()));
        self.page.clone()
    }
}
