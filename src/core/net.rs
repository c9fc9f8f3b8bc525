// src/core/net.rs

// Blocking HTTPS GET with a bounded timeout (reqwest).

use reqwest::blocking::Client;

use crate::config::options::ResolveOptions;
use crate::error::ResolveError;
use crate::resolver::Fetch;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ResolveOptions) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .timeout(opts.timeout())
            .user_agent(opts.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, ResolveError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        // Non-2xx bodies still get parsed; a missing tag reports NotFound.
        if status.is_success() {
            logd!("Net: GET {} → {}", url, status);
        } else {
            logf!("Net: GET {} → {} (parsing body anyway)", url, status);
        }
        Ok(resp.text()?)
    }
}
