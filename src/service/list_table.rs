//! Crawl-issue list pipeline: search, sort, paginate.
//!
//! Stage order is fixed: filter, then pagination totals over the filtered
//! count, then sort, then the page slice. Reordering any of these changes
//! what the table shows.

use std::sync::Arc;

use crate::domain::models::{
    BulkAction, Category, CrawlIssue, IssuePage, PageRequest, PaginationMeta, SortField, SortOrder,
    DEFAULT_PER_PAGE,
};
use crate::error::{ListError, Result};
use crate::repository::IssueSource;

/// Produces one page of crawl issues for the host's list table.
pub struct ListTable {
    source: Arc<dyn IssueSource>,
}

impl ListTable {
    pub fn new(source: Arc<dyn IssueSource>) -> Self {
        Self { source }
    }

    /// Active category, needed by the host to gate redirect affordances.
    pub async fn category(&self) -> Result<Category> {
        self.source.category().await.map_err(ListError::source)
    }

    /// Fetch the full record set and run it through the pipeline.
    pub async fn prepare(&self, request: &PageRequest) -> Result<IssuePage> {
        let issues = self.source.issues().await.map_err(ListError::source)?;
        log::debug!("[LIST] Source delivered {} issues", issues.len());
        Ok(run_pipeline(issues, request))
    }

    /// Bulk actions offered in the host's dropdown.
    pub fn bulk_actions() -> &'static [BulkAction] {
        &[BulkAction::MarkAsFixed]
    }
}

/// Apply filter, totals, sort and page slice in that order.
pub fn run_pipeline(issues: Vec<CrawlIssue>, request: &PageRequest) -> IssuePage {
    // Requests built by hand can carry a zero page size; default it like
    // any other bad parameter instead of dividing by zero.
    let page_size = if request.page_size > 0 {
        request.page_size
    } else {
        DEFAULT_PER_PAGE
    };

    if issues.is_empty() {
        log::debug!("[LIST] No issues for the active category");
        return IssuePage {
            items: Vec::new(),
            meta: PaginationMeta::empty(page_size),
        };
    }

    let filtered = match request.search.as_deref() {
        Some(query) => filter_issues(issues, query),
        None => issues,
    };

    // Totals come from the filtered count, before the page slice.
    let meta = PaginationMeta::new(filtered.len(), page_size);

    let sorted = sort_issues(filtered, request.sort_field, request.sort_order);
    let items = paginate(sorted, request.page_number, page_size);

    log::debug!(
        "[LIST] Page {} of {} with {} rows ({} total)",
        request.page_number,
        meta.total_pages,
        items.len(),
        meta.total_items
    );

    IssuePage { items, meta }
}

/// Keep the issues with at least one field containing `query`,
/// case-insensitively. An empty query keeps everything.
pub fn filter_issues(issues: Vec<CrawlIssue>, query: &str) -> Vec<CrawlIssue> {
    if query.is_empty() {
        return issues;
    }

    let needle = query.to_lowercase();
    issues
        .into_iter()
        .filter(|issue| {
            issue
                .fields()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Order issues by one column.
///
/// Comparison is bytewise on the string values, response codes and
/// timestamps included; `sort_by` is stable, so equal keys keep their
/// input order.
pub fn sort_issues(
    mut issues: Vec<CrawlIssue>,
    field: SortField,
    order: SortOrder,
) -> Vec<CrawlIssue> {
    issues.sort_by(|a, b| {
        let cmp = field.value_of(a).cmp(field.value_of(b));
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
    issues
}

/// Cut one page out of the ordered set.
///
/// The slice is clamped to the available length; a page past the end is
/// empty, never an error, and page 0 behaves like page 1.
pub fn paginate(issues: Vec<CrawlIssue>, page_number: u32, page_size: usize) -> Vec<CrawlIssue> {
    let start = (page_number.saturating_sub(1) as usize).saturating_mul(page_size);
    issues.into_iter().skip(start).take(page_size).collect()
}
