//! HTTP access for the audit: page fetch, redirect walk and link probing.

use super::report::Accessibility;
use crate::config::AuditSettings;
use crate::error::{Result, SeoAuditError};
use reqwest::blocking::{Client, Response};
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Message reported when the audited URL cannot be reached at all.
pub const NOT_ACCESSIBLE: &str = "URL is not accessible";

/// Decides whether a linked resource is broken.
pub trait LinkChecker {
    fn is_broken(&self, url: &Url) -> bool;
}

/// Result of following a redirect chain by hand.
#[derive(Debug)]
pub struct RedirectWalk {
    pub final_url: Url,
    pub redirects: usize,
    pub redirect_loop: bool,
    pub response: Response,
}

/// Blocking HTTP client used by every network check.
pub struct HttpClient {
    client: Client,
    page_timeout: Duration,
    probe_timeout: Duration,
    max_redirects: usize,
}

impl HttpClient {
    /// Create a new client from the `[audit]` settings.
    ///
    /// Redirects are never followed automatically so they can be counted.
    pub fn new(settings: &AuditSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client,
            page_timeout: settings.page_timeout(),
            probe_timeout: settings.probe_timeout(),
            max_redirects: settings.max_redirects,
        })
    }

    /// Fetch the page body. Only a 2xx final response counts as success.
    pub fn get_page_content(&self, url: &Url) -> Result<String> {
        let walk = self
            .follow(url)
            .map_err(|e| SeoAuditError::FetchFailed(e.to_string()))?;

        let status = walk.response.status();
        if !status.is_success() {
            return Err(SeoAuditError::FetchFailed(format!(
                "HTTP {} from {}",
                status, walk.final_url
            )));
        }

        walk.response
            .text()
            .map_err(|e| SeoAuditError::FetchFailed(e.to_string()))
    }

    /// Report the final URL, redirect count and status for `url`.
    pub fn check_accessibility(&self, url: &Url) -> Accessibility {
        match self.follow(url) {
            Ok(walk) => Accessibility::Reachable {
                final_url: walk.final_url.to_string(),
                redirect_count: walk.redirects,
                status_code: walk.response.status().as_u16(),
                redirect_loop: walk.redirect_loop,
            },
            Err(e) => {
                tracing::info!(%url, error = %e, "accessibility check failed");
                Accessibility::Unreachable {
                    error: NOT_ACCESSIBLE.to_string(),
                }
            }
        }
    }

    /// GET `url`, following at most `max_redirects` redirects.
    ///
    /// Stops early when a redirect points back to a URL already visited.
    pub fn follow(&self, url: &Url) -> std::result::Result<RedirectWalk, reqwest::Error> {
        let mut current = url.clone();
        let mut visited = HashSet::from([current.to_string()]);
        let mut redirects = 0;

        loop {
            tracing::debug!(url = %current, "GET");
            let response = self
                .client
                .get(current.clone())
                .timeout(self.page_timeout)
                .send()?;

            let next = if response.status().is_redirection() && redirects < self.max_redirects {
                redirect_target(&current, &response)
            } else {
                None
            };

            let Some(next) = next else {
                return Ok(RedirectWalk {
                    final_url: current,
                    redirects,
                    redirect_loop: false,
                    response,
                });
            };

            redirects += 1;
            if !visited.insert(next.to_string()) {
                tracing::info!(url = %next, "redirect loop detected");
                return Ok(RedirectWalk {
                    final_url: next,
                    redirects,
                    redirect_loop: true,
                    response,
                });
            }
            current = next;
        }
    }
}

impl LinkChecker for HttpClient {
    fn is_broken(&self, url: &Url) -> bool {
        match self
            .client
            .head(url.clone())
            .timeout(self.probe_timeout)
            .send()
        {
            Ok(response) => {
                let status = response.status();
                tracing::debug!(%url, %status, "HEAD");
                status.as_u16() >= 400
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "HEAD failed");
                true
            }
        }
    }
}

fn redirect_target(current: &Url, response: &Response) -> Option<Url> {
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    current.join(location).ok()
}
