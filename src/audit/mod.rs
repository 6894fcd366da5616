//! One-page SEO audit.
//!
//! Fetches a page, parses it and runs every on-page and network check in a
//! fixed order, producing an [`AuditReport`].

pub mod analysis;
mod client;
mod lighthouse;
mod report;

pub use client::{HttpClient, LinkChecker, RedirectWalk, NOT_ACCESSIBLE};
pub use lighthouse::{
    find_lighthouse, parse_first_contentful_paint, LighthouseRunner, LIGHTHOUSE_SKIPPED,
    LIGHTHOUSE_UNAVAILABLE,
};
pub use report::{
    Accessibility, AnchorTexts, AuditReport, Crawlability, H1Tags, Images, InternalLinks,
    Metadata, PageSpeed,
};

use crate::config::AuditSettings;
use crate::error::{Result, SeoAuditError};
use scraper::Html;
use url::Url;

/// Parse and validate an absolute http(s) URL.
pub fn validate_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim()).map_err(|e| SeoAuditError::InvalidUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SeoAuditError::InvalidUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(SeoAuditError::InvalidUrl("missing host".into()));
    }

    Ok(url)
}

/// Runs the full audit against one URL.
pub struct Auditor {
    client: HttpClient,
    lighthouse: Option<LighthouseRunner>,
    skip_lighthouse: bool,
}

impl Auditor {
    pub fn new(settings: &AuditSettings) -> Result<Self> {
        let lighthouse =
            find_lighthouse(settings.lighthouse_path.as_deref()).map(LighthouseRunner::new);
        match &lighthouse {
            Some(runner) => {
                tracing::info!(path = %runner.executable().display(), "using lighthouse")
            }
            None => tracing::info!("lighthouse not found, page speed will be unavailable"),
        }

        Ok(Self {
            client: HttpClient::new(settings)?,
            lighthouse,
            skip_lighthouse: false,
        })
    }

    /// Skip the Lighthouse page speed run.
    pub fn skip_lighthouse(mut self, skip: bool) -> Self {
        self.skip_lighthouse = skip;
        self
    }

    pub fn run(&self, url: &Url) -> Result<AuditReport> {
        let content = self.client.get_page_content(url)?;
        let doc = Html::parse_document(&content);

        tracing::info!(%url, bytes = content.len(), "page fetched, running checks");

        let metadata = analysis::analyze_metadata(&doc)?;
        let internal_links = analysis::check_internal_links(&doc, url, &self.client)?;
        let h1_tags = analysis::analyze_h1_tags(&doc)?;
        let anchor_texts = analysis::analyze_anchor_texts(&doc)?;
        let images = analysis::analyze_images(&doc, url, &self.client)?;
        let accessibility = self.client.check_accessibility(url);
        let crawlability = analysis::check_crawlability(&doc, url, &self.client)?;
        let page_speed = self.page_speed(url);

        Ok(AuditReport {
            url: url.to_string(),
            metadata,
            internal_links,
            h1_tags,
            anchor_texts,
            images,
            accessibility,
            crawlability,
            page_speed,
        })
    }

    fn page_speed(&self, url: &Url) -> PageSpeed {
        if self.skip_lighthouse {
            return lighthouse::unavailable(LIGHTHOUSE_SKIPPED);
        }
        match &self.lighthouse {
            Some(runner) => runner.analyze_page_speed(url),
            None => lighthouse::unavailable(LIGHTHOUSE_UNAVAILABLE),
        }
    }
}
