//! Per-issue remediation action resolution.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::models::{ActionState, Category, CrawlIssue};
use crate::repository::{RedirectLookup, RedirectProvider};

/// Decides which remediation affordance one crawl issue gets.
///
/// Scoped to a single request/response cycle: the capability check and the
/// redirect-manager instance are resolved once, on first use, and reused for
/// every row on the page.
pub struct ActionResolver {
    provider: Arc<dyn RedirectProvider>,
    manager: OnceCell<Option<Arc<dyn RedirectLookup>>>,
}

impl ActionResolver {
    pub fn new(provider: Arc<dyn RedirectProvider>) -> Self {
        Self {
            provider,
            manager: OnceCell::new(),
        }
    }

    /// Resolve the action state for one issue.
    ///
    /// The category is list-wide context; callers resolve it once per page
    /// and pass it down. Only the redirect-eligible categories ever reach
    /// the capability check.
    pub async fn resolve(&self, category: Category, issue: &CrawlIssue) -> ActionState {
        if !category.allows_redirect() {
            return ActionState::NoPremium;
        }

        let Some(manager) = self.manager().await else {
            return ActionState::NoPremium;
        };

        match manager.search(&issue.url).await {
            Ok(Some(redirect)) => {
                log::debug!("[RESOLVE] Redirect already exists for {}", issue.url);
                ActionState::AlreadyExists { redirect }
            }
            Ok(None) => ActionState::Create,
            Err(err) => {
                // Lookup failure counts as "no match"; the page still renders.
                log::warn!("[RESOLVE] Redirect lookup failed for {}: {:#}", issue.url, err);
                ActionState::Create
            }
        }
    }

    /// The memoized redirect manager, `None` when the capability is absent
    /// or the capability check itself failed.
    async fn manager(&self) -> Option<Arc<dyn RedirectLookup>> {
        self.manager
            .get_or_init(|| async {
                match self.provider.redirect_manager().await {
                    Ok(manager) => {
                        log::debug!(
                            "[RESOLVE] Redirect capability: {}",
                            if manager.is_some() { "available" } else { "absent" }
                        );
                        manager
                    }
                    Err(err) => {
                        log::warn!("[RESOLVE] Redirect capability check failed: {:#}", err);
                        None
                    }
                }
            })
            .await
            .clone()
    }
}
