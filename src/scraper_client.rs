use crate::errors::ScraperError;
use log::{error, info};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, IntoUrl};
use std::time::Duration;
use std::time::Instant;

/// User agent sent with every request so the listing page serves the same
/// markup it serves a desktop browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub struct ScraperClient {
    client: Client,
    request_id: u64,
    stats: ScraperClientStats,
}

// Stats struct for tracking usage (optional)
#[derive(Default)]
struct ScraperClientStats {
    total_requests: u64,
    successful_requests: u64,
    failed_requests: u64,
}

impl ScraperClient {
    /// Create a new scraper client with the default timeout configuration
    pub fn new_http() -> Self {
        Self::new_with_config(Duration::from_secs(30))
    }

    /// Create a new scraper client with a custom timeout
    fn new_with_config(timeout: Duration) -> Self {
        let client = Client::builder()
            .default_headers(Self::default_headers())
            .timeout(timeout)
            .pool_idle_timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            request_id: 0,
            stats: ScraperClientStats::default(),
        }
    }

    /// Default headers for the client
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers
    }

    /// Asynchronously fetch the content of the web page. One attempt only:
    /// a transport failure or a non-success status is handed straight back
    /// to the caller
    pub async fn fetch_url<U: IntoUrl>(&mut self, url: U) -> Result<String, ScraperError> {
        self.request_id += 1;
        info!("Fetching page with request ID: {}", self.request_id);

        let start_time = Instant::now();
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request error: {}", e);
                self.record_failure();
                return Err(ScraperError::FetchError(e));
            }
        };

        if !response.status().is_success() {
            error!("Request failed with status: {}", response.status());
            self.record_failure();
            return Err(ScraperError::StatusError(response.status()));
        }

        match response.text().await {
            Ok(body) => {
                self.record_success();
                info!("Successfully fetched after {:?}", start_time.elapsed());
                Ok(body)
            }
            Err(e) => {
                error!("Failed to read response body: {}", e);
                self.record_failure();
                Err(ScraperError::FetchError(e))
            }
        }
    }

    /// Track a successful request in the stats
    fn record_success(&mut self) {
        self.stats.total_requests += 1;
        self.stats.successful_requests += 1;
    }

    /// Track a failed request in the stats
    fn record_failure(&mut self) {
        self.stats.total_requests += 1;
        self.stats.failed_requests += 1;
    }

    /// Print the current statistics (total requests, successes, failures)
    pub fn print_stats(&self) {
        info!(
            "Total Requests: {}, Successful: {}, Failed: {}",
            self.stats.total_requests, self.stats.successful_requests, self.stats.failed_requests
        );
    }
}
