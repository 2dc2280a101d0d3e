//! Domain entities for the crawl-issue list.
//!
//! Every field of a crawl issue is kept as an opaque string: the report
//! service delivers strings and the list compares them bytewise, response
//! codes and timestamps included.

use serde::{Deserialize, Serialize};

/// Default number of rows per page when the user has no preference stored.
pub const DEFAULT_PER_PAGE: usize = 50;

// ====== Enums ======

/// Classification of the crawl issues currently being listed.
///
/// One category is active per request; it is a property of the whole list,
/// not of individual records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Soft404,
    NotFound,
    AccessDenied,
    ServerError,
    NotFollowed,
    Roboted,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Soft404 => "soft404",
            Category::NotFound => "notFound",
            Category::AccessDenied => "accessDenied",
            Category::ServerError => "serverError",
            Category::NotFollowed => "notFollowed",
            Category::Roboted => "roboted",
            Category::Other => "other",
        }
    }

    /// Parse a category name from the report service.
    ///
    /// Unknown names map to `Other`, the most restrictive category: it never
    /// offers redirect actions.
    pub fn parse(value: &str) -> Self {
        match value {
            "soft404" => Category::Soft404,
            "notFound" => Category::NotFound,
            "accessDenied" => Category::AccessDenied,
            "serverError" => Category::ServerError,
            "notFollowed" => Category::NotFollowed,
            "roboted" => Category::Roboted,
            _ => Category::Other,
        }
    }

    /// Whether issues in this category may be remediated with a redirect.
    pub fn allows_redirect(&self) -> bool {
        matches!(
            self,
            Category::Soft404 | Category::NotFound | Category::AccessDenied
        )
    }
}

/// Columns the list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortField {
    #[default]
    Url,
    LastCrawled,
    FirstDetected,
    ResponseCode,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Url => "url",
            SortField::LastCrawled => "last_crawled",
            SortField::FirstDetected => "first_detected",
            SortField::ResponseCode => "response_code",
        }
    }

    /// Parse a column name from request input; anything unknown sorts by URL.
    pub fn parse(value: &str) -> Self {
        match value {
            "url" => SortField::Url,
            "last_crawled" => SortField::LastCrawled,
            "first_detected" => SortField::FirstDetected,
            "response_code" => SortField::ResponseCode,
            _ => SortField::Url,
        }
    }

    /// The value of this column for one issue.
    pub fn value_of<'a>(&self, issue: &'a CrawlIssue) -> &'a str {
        match self {
            SortField::Url => &issue.url,
            SortField::LastCrawled => &issue.last_crawled,
            SortField::FirstDetected => &issue.first_detected,
            SortField::ResponseCode => &issue.response_code,
        }
    }
}

/// Sort direction; anything that is not `desc` sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

// ====== Issue & redirect entities ======

/// One reported crawl issue.
///
/// `url` is the identity key, but records are not deduplicated; the list
/// shows whatever the report service delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlIssue {
    pub url: String,
    pub last_crawled: String,
    pub first_detected: String,
    pub response_code: String,
}

impl CrawlIssue {
    /// All field values, in column order. Used by the search filter.
    pub fn fields(&self) -> [&str; 4] {
        [
            &self.url,
            &self.last_crawled,
            &self.first_detected,
            &self.response_code,
        ]
    }
}

/// An existing redirect found by the redirect manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub origin: String,
    pub target: String,
    pub status: u16,
}

/// The remediation affordance offered for one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionState {
    /// A redirect can be created for this URL.
    Create,
    /// A redirect already targets this URL.
    AlreadyExists { redirect: Redirect },
    /// Redirect management is not available for this category or deployment.
    NoPremium,
}

impl ActionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionState::Create => "create",
            ActionState::AlreadyExists { .. } => "already_exists",
            ActionState::NoPremium => "no_premium",
        }
    }
}

// ====== Paging ======

/// Normalized request parameters for one page of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// Free-text search; `None` means no filtering.
    pub search: Option<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// 1-based page number.
    pub page_number: u32,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            search: None,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page_number: 1,
            page_size: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Build a request from raw query input, normalizing every parameter.
    ///
    /// Bad input never errors: unknown sort fields fall back to `url`,
    /// unknown orders to `asc`, unparsable or sub-1 page numbers to page 1,
    /// and a missing or non-positive per-page preference to
    /// [`DEFAULT_PER_PAGE`].
    pub fn from_query(
        search: Option<&str>,
        orderby: Option<&str>,
        order: Option<&str>,
        paged: Option<&str>,
        per_page_pref: Option<usize>,
    ) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let page_number = paged
            .and_then(|p| p.trim().parse::<u32>().ok())
            .map(|p| p.max(1))
            .unwrap_or(1);

        let page_size = per_page_pref
            .filter(|&p| p > 0)
            .unwrap_or(DEFAULT_PER_PAGE);

        Self {
            search,
            sort_field: orderby.map(SortField::parse).unwrap_or_default(),
            sort_order: order.map(SortOrder::parse).unwrap_or_default(),
            page_number,
            page_size,
        }
    }
}

/// Pagination totals for the rendered table footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub total_items: usize,
    pub total_pages: usize,
    pub per_page: usize,
}

impl PaginationMeta {
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            total_items,
            total_pages: total_items.div_ceil(per_page),
            per_page,
        }
    }

    /// Totals for a list with no records at all.
    pub fn empty(per_page: usize) -> Self {
        Self::new(0, per_page)
    }
}

/// One page of issues plus the totals it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePage {
    pub items: Vec<CrawlIssue>,
    pub meta: PaginationMeta,
}

// ====== Bulk actions ======

/// Bulk actions the list exposes to the host's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BulkAction {
    MarkAsFixed,
}

impl BulkAction {
    /// Stable identifier the host wires into its form handling.
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::MarkAsFixed => "mark_as_fixed",
        }
    }
}

/// The URL selection submitted with the mark-as-fixed bulk action.
///
/// The remote effect is executed elsewhere; this core only validates and
/// deduplicates the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkAsFixedRequest {
    pub urls: Vec<String>,
}

impl MarkAsFixedRequest {
    pub const ACTION: BulkAction = BulkAction::MarkAsFixed;

    /// Build a request from the checkbox selection.
    ///
    /// Duplicates collapse to their first occurrence; values that are not
    /// parseable URLs are dropped.
    pub fn new<I, S>(selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut urls: Vec<String> = Vec::new();
        for candidate in selected {
            let candidate = candidate.into();
            if url::Url::parse(&candidate).is_err() {
                log::warn!("[BULK] Dropping invalid selected URL: {}", candidate);
                continue;
            }
            if !urls.contains(&candidate) {
                urls.push(candidate);
            }
        }
        Self { urls }
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_known_and_unknown() {
        assert_eq!(Category::parse("soft404"), Category::Soft404);
        assert_eq!(Category::parse("notFound"), Category::NotFound);
        assert_eq!(Category::parse("accessDenied"), Category::AccessDenied);
        assert_eq!(Category::parse("serverError"), Category::ServerError);
        assert_eq!(
            Category::parse("somethingNew"),
            Category::Other,
            "Unknown categories must map to Other"
        );
    }

    #[test]
    fn test_category_redirect_gate() {
        assert!(Category::Soft404.allows_redirect());
        assert!(Category::NotFound.allows_redirect());
        assert!(Category::AccessDenied.allows_redirect());

        assert!(!Category::ServerError.allows_redirect());
        assert!(!Category::NotFollowed.allows_redirect());
        assert!(!Category::Roboted.allows_redirect());
        assert!(!Category::Other.allows_redirect());
    }

    #[test]
    fn test_sort_field_parse_falls_back_to_url() {
        assert_eq!(SortField::parse("response_code"), SortField::ResponseCode);
        assert_eq!(SortField::parse("last_crawled"), SortField::LastCrawled);
        assert_eq!(SortField::parse("nonsense"), SortField::Url);
        assert_eq!(SortField::parse(""), SortField::Url);
    }

    #[test]
    fn test_sort_order_parse_falls_back_to_asc() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("random"), SortOrder::Asc);
    }

    #[test]
    fn test_page_request_normalizes_bad_input() {
        let request = PageRequest::from_query(
            Some("   "),
            Some("bogus_column"),
            Some("sideways"),
            Some("0"),
            Some(0),
        );

        assert_eq!(request.search, None, "Blank search must normalize to None");
        assert_eq!(request.sort_field, SortField::Url);
        assert_eq!(request.sort_order, SortOrder::Asc);
        assert_eq!(request.page_number, 1, "Page 0 must clamp to page 1");
        assert_eq!(request.page_size, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_page_request_keeps_good_input() {
        let request = PageRequest::from_query(
            Some("404"),
            Some("response_code"),
            Some("desc"),
            Some("3"),
            Some(25),
        );

        assert_eq!(request.search.as_deref(), Some("404"));
        assert_eq!(request.sort_field, SortField::ResponseCode);
        assert_eq!(request.sort_order, SortOrder::Desc);
        assert_eq!(request.page_number, 3);
        assert_eq!(request.page_size, 25);
    }

    #[test]
    fn test_page_request_unparsable_page_defaults_to_one() {
        let request = PageRequest::from_query(None, None, None, Some("last"), None);
        assert_eq!(request.page_number, 1);
    }

    #[test]
    fn test_pagination_meta_rounds_pages_up() {
        let meta = PaginationMeta::new(51, 50);
        assert_eq!(meta.total_pages, 2);

        let meta = PaginationMeta::new(50, 50);
        assert_eq!(meta.total_pages, 1);

        let meta = PaginationMeta::empty(50);
        assert_eq!(meta.total_items, 0);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.per_page, 50);
    }

    #[test]
    fn test_mark_as_fixed_dedups_and_validates() {
        let request = MarkAsFixedRequest::new([
            "https://example.com/a",
            "https://example.com/b",
            "https://example.com/a",
            "not a url",
        ]);

        assert_eq!(
            request.urls,
            vec![
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
            ],
            "Selection must deduplicate in first-seen order and drop junk"
        );
        assert_eq!(request.len(), 2);
        assert_eq!(MarkAsFixedRequest::ACTION.as_str(), "mark_as_fixed");
    }

    #[test]
    fn test_action_state_serializes_for_the_renderer() {
        let state = ActionState::AlreadyExists {
            redirect: Redirect {
                origin: "https://example.com/old".into(),
                target: "https://example.com/new".into(),
                status: 301,
            },
        };
        let json = serde_json::to_value(&state).expect("serialize");

        assert_eq!(json["action"], "already_exists");
        assert_eq!(json["redirect"]["target"], "https://example.com/new");

        let json = serde_json::to_value(ActionState::NoPremium).expect("serialize");
        assert_eq!(json["action"], "no_premium");
        assert_eq!(ActionState::Create.as_str(), "create");
    }
}
