// tests/http_fetch.rs
//
// Real HTTP client against a local server.
mod common;

use std::time::{Duration, Instant};

use common::{ALICE_PAGE, LOGIN_WALL, html_server::{self, Behavior}};
use fb_linkgen::{
    Fetch, ResolveError, Resolver,
    config::options::ResolveOptions,
    core::net::HttpFetcher,
};

fn local_opts(timeout_secs: u64) -> ResolveOptions {
    ResolveOptions {
        domain: "127.0.0.1".into(),
        timeout_secs,
        ..ResolveOptions::default()
    }
}

#[test]
fn fetcher_returns_body() {
    let server = html_server::start(ALICE_PAGE, Behavior::Respond(200));
    let fetcher = HttpFetcher::new(&local_opts(5)).unwrap();
    let body = fetcher.get(&server.url("alice")).unwrap();
    assert!(body.contains("fb://profile/1000023"));
    assert_eq!(server.hits(), 1);
}

#[test]
fn resolves_over_http() {
    let server = html_server::start(ALICE_PAGE, Behavior::Respond(200));
    let resolver = Resolver::http(&local_opts(5)).unwrap();
    let profile = resolver.resolve(&server.url("alice.smith")).unwrap();
    assert_eq!(profile.identifier(), "1000023");
    assert_eq!(profile.username(), "alice.smith");
}

#[test]
fn error_status_without_meta_is_not_found() {
    let server = html_server::start(LOGIN_WALL, Behavior::Respond(404));
    let resolver = Resolver::http(&local_opts(5)).unwrap();
    let err = resolver.resolve(&server.url("ghost")).unwrap_err();
    assert_eq!(err, ResolveError::NotFound);
}

#[test]
fn silent_server_times_out() {
    let server = html_server::start(ALICE_PAGE, Behavior::Silent(Duration::from_secs(6)));
    let resolver = Resolver::http(&local_opts(1)).unwrap();

    let started = Instant::now();
    let err = resolver.resolve(&server.url("alice")).unwrap_err();
    assert!(matches!(err, ResolveError::Network(_)), "{err:?}");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn refused_connection_is_network_error() {
    // Bind then drop to get a port with nothing listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let resolver = Resolver::http(&local_opts(2)).unwrap();
    let err = resolver.resolve(&format!("http://127.0.0.1:{port}/alice")).unwrap_err();
    assert!(matches!(err, ResolveError::Network(_)), "{err:?}");
}
