//! In-memory collaborator implementations.
//!
//! Used by embedding hosts that already hold a fetched report in memory,
//! and by tests that need deterministic collaborators.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{IssueSource, RedirectLookup, RedirectProvider};
use crate::domain::models::{Category, CrawlIssue, Redirect};

/// Vec-backed issue source with a fixed category.
pub struct StaticIssueSource {
    category: Category,
    issues: Vec<CrawlIssue>,
}

impl StaticIssueSource {
    pub fn new(category: Category, issues: Vec<CrawlIssue>) -> Self {
        Self { category, issues }
    }
}

#[async_trait]
impl IssueSource for StaticIssueSource {
    async fn category(&self) -> Result<Category> {
        Ok(self.category)
    }

    async fn issues(&self) -> Result<Vec<CrawlIssue>> {
        Ok(self.issues.clone())
    }
}

/// Redirect table held in memory, searched by exact origin match.
pub struct InMemoryRedirects {
    entries: RwLock<Vec<Redirect>>,
}

impl InMemoryRedirects {
    pub fn new(entries: Vec<Redirect>) -> Arc<Self> {
        Arc::new(Self {
            entries: RwLock::new(entries),
        })
    }

    pub async fn insert(&self, redirect: Redirect) {
        self.entries.write().await.push(redirect);
    }
}

#[async_trait]
impl RedirectLookup for InMemoryRedirects {
    async fn search(&self, url: &str) -> Result<Option<Redirect>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|r| r.origin == url).cloned())
    }
}

/// Provider with a fixed capability outcome.
pub struct StaticRedirectProvider {
    manager: Option<Arc<dyn RedirectLookup>>,
}

impl StaticRedirectProvider {
    /// The redirect-management feature is present.
    pub fn available(manager: Arc<dyn RedirectLookup>) -> Self {
        Self {
            manager: Some(manager),
        }
    }

    /// The feature is absent from this deployment.
    pub fn unavailable() -> Self {
        Self { manager: None }
    }
}

#[async_trait]
impl RedirectProvider for StaticRedirectProvider {
    async fn redirect_manager(&self) -> Result<Option<Arc<dyn RedirectLookup>>> {
        Ok(self.manager.clone())
    }
}
