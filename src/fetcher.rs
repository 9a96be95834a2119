//! HTTP retrieval of candidate policy documents

use std::time::Duration;
use thiserror::Error;

/// Default request timeout. A hung server must not block the caller
/// indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default redirect hop limit.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default User-Agent header for outbound requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; policheck/0.3)";

/// Transport settings for the fetch.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// Any error while retrieving the target URL. The analysis contract folds
/// every variant into a single failure outcome carrying the display message;
/// callers never see a partially fetched document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// A fetched document, ready for evaluation.
#[derive(Debug, Clone)]
pub struct PolicyDocument {
    /// Final URL after redirects
    pub url: String,
    /// Raw response body. Criteria match over this text as-is.
    pub body: String,
}

/// Blocking HTTP client wrapper. One GET per analysis; the connection is
/// pooled by the underlying client and shared across analyses.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET the URL and return the body as text. The body is read whole;
    /// non-2xx statuses are errors, as are malformed URLs, DNS failures,
    /// and timeouts.
    pub fn fetch(&self, url: &str) -> Result<PolicyDocument, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html")
            .send()
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let final_url = response.url().to_string();
        let body = response.text().map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })?;

        Ok(PolicyDocument {
            url: final_url,
            body,
        })
    }
}
