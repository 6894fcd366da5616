//! Audit report types and text rendering.

use crate::error::Result;
use serde::Serialize;

/// Title and meta description analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub meta_description: String,
    pub title_length: usize,
    pub meta_description_length: usize,
}

/// Internal link verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternalLinks {
    pub total_internal_links: usize,
    pub broken_internal_links: Vec<String>,
}

/// H1 tag examination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct H1Tags {
    pub total_h1_tags: usize,
    pub h1_tags: Vec<String>,
    pub suggestion: String,
}

/// Link anchor text review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorTexts {
    pub total_anchor_links: usize,
    pub empty_anchor_texts: usize,
    pub suggestion: String,
}

/// Image diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Images {
    pub total_images: usize,
    pub images_missing_alt_text: Vec<String>,
    pub broken_images: Vec<String>,
}

/// Reachability of the audited URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Accessibility {
    Reachable {
        final_url: String,
        redirect_count: usize,
        status_code: u16,
        redirect_loop: bool,
    },
    Unreachable {
        error: String,
    },
}

/// JS and CSS assets that could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crawlability {
    pub broken_js_files: Vec<String>,
    pub broken_css_files: Vec<String>,
}

/// Lighthouse page speed result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageSpeed {
    Measured { first_contentful_paint: String },
    Unavailable { error: String },
}

/// Full one-page audit.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub url: String,
    pub metadata: Metadata,
    pub internal_links: InternalLinks,
    pub h1_tags: H1Tags,
    pub anchor_texts: AnchorTexts,
    pub images: Images,
    pub accessibility: Accessibility,
    pub crawlability: Crawlability,
    pub page_speed: PageSpeed,
}

impl AuditReport {
    /// Render the report as titled sections, one JSON block each.
    pub fn render_text(&self) -> Result<String> {
        let sections: [(&str, serde_json::Value); 8] = [
            (
                "Title & Meta Description Analysis",
                serde_json::to_value(&self.metadata)?,
            ),
            (
                "Internal Link Verification",
                serde_json::to_value(&self.internal_links)?,
            ),
            ("H1 Tag Examination", serde_json::to_value(&self.h1_tags)?),
            (
                "Link Anchor Text Review",
                serde_json::to_value(&self.anchor_texts)?,
            ),
            ("Image Diagnostics", serde_json::to_value(&self.images)?),
            (
                "Accessibility Assessment",
                serde_json::to_value(&self.accessibility)?,
            ),
            (
                "Crawlability Check",
                serde_json::to_value(&self.crawlability)?,
            ),
            ("Page Speed Insights", serde_json::to_value(&self.page_speed)?),
        ];

        let mut out = String::new();
        out.push_str("SEO Audit Results\n");
        out.push_str("=================\n");
        out.push_str(&format!("URL: {}\n", self.url));

        for (title, body) in sections {
            out.push('\n');
            out.push_str(title);
            out.push('\n');
            out.push_str(&"-".repeat(title.len()));
            out.push('\n');
            out.push_str(&serde_json::to_string_pretty(&body)?);
            out.push('\n');
        }

        Ok(out)
    }
}
