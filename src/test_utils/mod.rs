#[cfg(test)]
pub mod fixtures {
    use chrono::{Duration, NaiveDate};

    use crate::domain::models::{CrawlIssue, Redirect};

    /// Fixed report date for fixture timestamps; the list only ever compares
    /// them lexically, so determinism matters more than recency.
    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 3, 14).expect("valid fixture date")
    }

    /// A crawl-date string `days_ago` before the fixture report date.
    pub fn crawl_stamp(days_ago: i64) -> String {
        (report_date() - Duration::days(days_ago))
            .format("%Y-%m-%d")
            .to_string()
    }

    /// One issue with the given URL and response code, crawled "today" and
    /// first detected a week earlier.
    pub fn issue(url: &str, response_code: &str) -> CrawlIssue {
        CrawlIssue {
            url: url.into(),
            last_crawled: crawl_stamp(0),
            first_detected: crawl_stamp(7),
            response_code: response_code.into(),
        }
    }

    pub fn redirect(origin: &str, target: &str) -> Redirect {
        Redirect {
            origin: origin.into(),
            target: target.into(),
            status: 301,
        }
    }

    /// The three-row report used across the pipeline tests: two 404s around
    /// a 500, so filter and tie-break behavior are both observable.
    pub fn sample_issues() -> Vec<CrawlIssue> {
        vec![
            issue("https://a.com/", "404"),
            issue("https://b.com/", "500"),
            issue("https://c.com/", "404"),
        ]
    }
}

/// Helper assertions for tests
#[cfg(test)]
pub mod assertions {
    use crate::domain::models::CrawlIssue;

    /// The url column of a record set, for order-sensitive comparisons.
    pub fn urls(issues: &[CrawlIssue]) -> Vec<&str> {
        issues.iter().map(|issue| issue.url.as_str()).collect()
    }

    /// Asserts that a record set holds exactly the expected URLs, in order.
    #[macro_export]
    macro_rules! assert_row_urls {
        ($issues:expr, $expected:expr) => {
            assert_eq!(
                $crate::test_utils::assertions::urls($issues),
                $expected.to_vec(),
                "Rows did not match the expected URLs in order"
            );
        };
    }
}
