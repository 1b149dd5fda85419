// ABOUTME: The main Client struct handling HTTP fetch and strategy dispatch.
// ABOUTME: Provides async extract() to pull structured job fields from a posting URL.

use std::collections::HashMap;
use std::net::ToSocketAddrs;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::ScrapeError;
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};
use crate::result::JobPosting;
use crate::sites::Site;

/// Browser-like headers sent with every page fetch. Accept-Encoding is
/// negotiated by the HTTP client's enabled compression codecs so that the
/// response is decompressed transparently.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("Connection", "keep-alive"),
];

/// The extraction client: one stateless fetch-and-extract per call.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            let allow_private = opts.allow_private_networks;
            let redirect_policy = reqwest::redirect::Policy::custom(move |attempt| {
                let next = attempt.url().clone();
                if !allow_private {
                    if let Some(host) = next.host_str() {
                        let scheme = next.scheme();
                        let port = next
                            .port()
                            .unwrap_or(if scheme == "https" { 443 } else { 80 });
                        if let Ok(ip) = host.parse::<std::net::IpAddr>() {
                            if crate::resource::is_private_ip(&ip) {
                                return attempt.error("redirect to private IP blocked");
                            }
                        } else {
                            // synchronous DNS resolution to avoid async in redirect policy
                            let addr_str = format!("{}:{}", host, port);
                            match addr_str.to_socket_addrs() {
                                Ok(addrs) => {
                                    for sa in addrs {
                                        if crate::resource::is_private_ip(&sa.ip()) {
                                            return attempt.error("redirect to private IP blocked");
                                        }
                                    }
                                }
                                Err(_) => {
                                    return attempt.error("DNS lookup failed during redirect");
                                }
                            }
                        }
                    }
                }
                attempt.follow()
            });

            reqwest::Client::builder()
                .redirect(redirect_policy)
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Extract job-posting fields from the page at the given URL.
    ///
    /// One GET, no retries, no caching. The strategy is chosen from the
    /// caller-supplied URL; its result is returned unchanged, empty fields
    /// included. A fully empty record means "fall back to manual entry".
    pub async fn extract(&self, url: &str) -> Result<JobPosting, ScrapeError> {
        if url.is_empty() {
            return Err(ScrapeError::invalid_url(url, "Extract", None));
        }

        let fetch_opts = FetchOptions {
            headers: self.request_headers(),
            allow_private_networks: self.opts.allow_private_networks,
        };

        let fetch_result = fetch(&self.http_client, url, &fetch_opts).await?;
        let page_text = fetch_result.text_utf8();

        let site = Site::for_url(url);
        let record = run_strategy(|| site.extract(&page_text), url)?;

        tracing::debug!(
            url,
            site = ?site,
            empty = record.is_empty(),
            "extracted job posting fields"
        );

        Ok(record)
    }

    fn request_headers(&self) -> HashMap<String, String> {
        let mut headers: HashMap<String, String> = BROWSER_HEADERS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (key, value) in &self.opts.headers {
            headers.insert(key.clone(), value.clone());
        }
        headers
    }
}

/// Run a strategy, mapping a wholesale failure to an Extract error.
///
/// Strategies swallow per-field anomalies themselves; a panic can only
/// come from markup pathological enough to break a matching primitive.
fn run_strategy<F>(strategy: F, url: &str) -> Result<JobPosting, ScrapeError>
where
    F: FnOnce() -> JobPosting,
{
    catch_unwind(AssertUnwindSafe(strategy)).map_err(|_| {
        ScrapeError::extract(
            url,
            "Extract",
            Some(anyhow::anyhow!("strategy failed against page markup")),
        )
    })
}
