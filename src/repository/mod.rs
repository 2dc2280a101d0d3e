use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::models::{Category, CrawlIssue, Redirect};

mod memory;

pub use memory::{InMemoryRedirects, StaticIssueSource, StaticRedirectProvider};

/// Source of crawl issues for the active category.
///
/// The source does no filtering, sorting or paging; it hands over the full
/// record set for the category it is currently reporting on.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Active category for the whole list.
    async fn category(&self) -> Result<Category>;

    /// All records for that category.
    async fn issues(&self) -> Result<Vec<CrawlIssue>>;
}

/// Lookup into the redirect manager of a premium deployment.
#[async_trait]
pub trait RedirectLookup: Send + Sync {
    /// Find an existing redirect whose origin matches `url`.
    async fn search(&self, url: &str) -> Result<Option<Redirect>>;
}

/// Capability gate for redirect management.
///
/// Deployments without the feature return `None`; the resolver then offers
/// no redirect actions at all.
#[async_trait]
pub trait RedirectProvider: Send + Sync {
    async fn redirect_manager(&self) -> Result<Option<Arc<dyn RedirectLookup>>>;
}
