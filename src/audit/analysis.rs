//! On-page checks over a parsed HTML document.

use super::client::LinkChecker;
use super::report::{AnchorTexts, Crawlability, H1Tags, Images, InternalLinks, Metadata};
use crate::error::{Result, SeoAuditError};
use scraper::{ElementRef, Html, Selector};
use url::Url;

pub const NO_TITLE: &str = "No Title Found";
pub const NO_META_DESCRIPTION: &str = "No Meta Description Found";
pub const MISSING_SRC: &str = "(missing src)";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SeoAuditError::Selector(format!("{css}: {e}")))
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Resolve `reference` against `base`, skipping anything that does not parse.
fn resolve(base: &Url, reference: &str) -> Option<Url> {
    match base.join(reference.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!(reference, error = %e, "skipping unresolvable reference");
            None
        }
    }
}

/// Title and `<meta name="description">`.
///
/// Missing values are reported with a placeholder and a length of 0.
pub fn analyze_metadata(doc: &Html) -> Result<Metadata> {
    let title = doc.select(&selector("title")?).next().map(element_text);
    let meta_description = doc
        .select(&selector(r#"meta[name="description"]"#)?)
        .find_map(|el| el.value().attr("content"))
        .map(str::to_string);

    Ok(Metadata {
        title_length: title.as_deref().map_or(0, |t| t.chars().count()),
        meta_description_length: meta_description
            .as_deref()
            .map_or(0, |d| d.chars().count()),
        title: title.unwrap_or_else(|| NO_TITLE.to_string()),
        meta_description: meta_description.unwrap_or_else(|| NO_META_DESCRIPTION.to_string()),
    })
}

/// Probe every `<a href>` whose resolved URL contains the base URL.
pub fn check_internal_links(
    doc: &Html,
    base: &Url,
    checker: &dyn LinkChecker,
) -> Result<InternalLinks> {
    let mut total_internal_links = 0;
    let mut broken_internal_links = Vec::new();

    for link in doc.select(&selector("a[href]")?) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Some(full_url) = resolve(base, href) else {
            continue;
        };
        if !full_url.as_str().contains(base.as_str()) {
            continue;
        }

        if checker.is_broken(&full_url) {
            broken_internal_links.push(full_url.to_string());
        } else {
            total_internal_links += 1;
        }
    }

    Ok(InternalLinks {
        total_internal_links,
        broken_internal_links,
    })
}

pub fn analyze_h1_tags(doc: &Html) -> Result<H1Tags> {
    let h1_tags: Vec<String> = doc.select(&selector("h1")?).map(element_text).collect();

    let suggestion = match h1_tags.len() {
        0 => "Add a main H1 tag describing the page",
        1 => "Looks Good!",
        _ => "Use only one main H1 tag for better SEO",
    };

    Ok(H1Tags {
        total_h1_tags: h1_tags.len(),
        h1_tags,
        suggestion: suggestion.to_string(),
    })
}

pub fn analyze_anchor_texts(doc: &Html) -> Result<AnchorTexts> {
    let texts: Vec<String> = doc.select(&selector("a")?).map(element_text).collect();

    Ok(AnchorTexts {
        total_anchor_links: texts.len(),
        empty_anchor_texts: texts.iter().filter(|t| t.is_empty()).count(),
        suggestion: "Ensure all links have meaningful anchor texts.".to_string(),
    })
}

/// Alt text presence and reachability of every `<img>`.
pub fn analyze_images(doc: &Html, base: &Url, checker: &dyn LinkChecker) -> Result<Images> {
    let mut total_images = 0;
    let mut images_missing_alt_text = Vec::new();
    let mut broken_images = Vec::new();

    for img in doc.select(&selector("img")?) {
        total_images += 1;

        let src = img.value().attr("src").and_then(|s| resolve(base, s));
        let alt = img.value().attr("alt").unwrap_or("").trim();

        if alt.is_empty() {
            images_missing_alt_text.push(
                src.as_ref()
                    .map_or_else(|| MISSING_SRC.to_string(), Url::to_string),
            );
        }

        if let Some(src) = src {
            if checker.is_broken(&src) {
                broken_images.push(src.to_string());
            }
        }
    }

    Ok(Images {
        total_images,
        images_missing_alt_text,
        broken_images,
    })
}

/// Probe external scripts and stylesheets.
pub fn check_crawlability(
    doc: &Html,
    base: &Url,
    checker: &dyn LinkChecker,
) -> Result<Crawlability> {
    let broken_js_files = broken_assets(doc, &selector("script[src]")?, "src", base, checker);
    let broken_css_files = broken_assets(
        doc,
        &selector(r#"link[rel~="stylesheet"][href]"#)?,
        "href",
        base,
        checker,
    );

    Ok(Crawlability {
        broken_js_files,
        broken_css_files,
    })
}

fn broken_assets(
    doc: &Html,
    sel: &Selector,
    attr: &str,
    base: &Url,
    checker: &dyn LinkChecker,
) -> Vec<String> {
    doc.select(sel)
        .filter_map(|el| el.value().attr(attr))
        .filter_map(|reference| resolve(base, reference))
        .filter(|url| checker.is_broken(url))
        .map(|url| url.to_string())
        .collect()
}
