// src/core/net.rs

// Blocking HTTP GET. One request at a time; timeouts live on the client.

use std::cell::RefCell;

use crate::config::options::ClientOptions;
use crate::config::consts::MAX_REDIRECTS;
use crate::error::FetchError;

/// A fetched document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Final URL after redirects.
    pub url: String,
    pub body: String,
}

/// The HTTP collaborator. Anything that can turn a URL into HTML.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Page, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<Page, FetchError> {
        (**self).get(url)
    }
}

/// `reqwest`-backed fetcher used against the live site.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(opts: &ClientOptions) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Page, FetchError> {
        logd!("GET {url}");
        let transport = |source| FetchError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        let final_url = resp.url().to_string();
        let body = resp.text().map_err(transport)?;
        logd!("fetched {} bytes from {final_url}", body.len());
        Ok(Page { url: final_url, body })
    }
}

/// Test double: serves canned pages by exact URL and records every request.
///
/// Unknown URLs answer 404. The request log is never trimmed, so keep it to
/// short-lived test fixtures.
#[doc(hidden)]
#[derive(Default)]
pub struct StaticFetcher {
    pages: Vec<(String, Page)>,
    requests: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `url`.
    pub fn page(self, url: &str, body: &str) -> Self {
        self.redirect(url, url, body)
    }

    /// Serve `body` at `url`, reporting `final_url` as where it ended up.
    pub fn redirect(mut self, url: &str, final_url: &str, body: &str) -> Self {
        self.pages.push((s!(url), Page { url: s!(final_url), body: s!(body) }));
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Fetch for StaticFetcher {
    fn get(&self, url: &str) -> Result<Page, FetchError> {
        self.requests.borrow_mut().push(s!(url));
        self.pages
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, page)| page.clone())
            .ok_or_else(|| FetchError::Status { url: s!(url), status: 404 })
    }
}
