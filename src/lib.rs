//! seo-audit - One Page SEO Audit CLI
//!
//! Audits a single web page for common on-page SEO problems and bootstraps
//! the Python environment the companion tooling runs in.

pub mod audit;
pub mod commands;
pub mod config;
pub mod error;
pub mod setup;

pub use config::Config;
pub use error::{Result, SeoAuditError};
