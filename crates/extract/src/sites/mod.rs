// ABOUTME: Site strategy dispatch: a closed enum of per-source extraction strategies.
// ABOUTME: Strategy selection is by URL substring in fixed priority; first match wins.

pub mod generic;
pub mod glassdoor;
pub mod indeed;
pub mod linkedin;
pub mod support;

use crate::result::JobPosting;

/// The closed set of site extraction strategies.
///
/// Each strategy is a pure function from page markup to a partial field
/// record; strategies are never combined or merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    LinkedIn,
    Indeed,
    Glassdoor,
    Generic,
}

impl Site {
    /// Select a strategy by substring match on the URL against known hosts.
    ///
    /// Fixed priority: linkedin.com, then indeed.com, then glassdoor.com,
    /// anything else falls back to the generic strategy.
    pub fn for_url(url: &str) -> Site {
        let lower = url.to_ascii_lowercase();
        if lower.contains("linkedin.com") {
            Site::LinkedIn
        } else if lower.contains("indeed.com") {
            Site::Indeed
        } else if lower.contains("glassdoor.com") {
            Site::Glassdoor
        } else {
            Site::Generic
        }
    }

    /// Run this strategy's ordered field rules against raw page text.
    ///
    /// Never fails: per-field extraction is isolated, and a page matching
    /// none of the rules yields a fully empty record.
    pub fn extract(&self, html: &str) -> JobPosting {
        match self {
            Site::LinkedIn => linkedin::extract(html),
            Site::Indeed => indeed::extract(html),
            Site::Glassdoor => glassdoor::extract(html),
            Site::Generic => generic::extract(html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_linkedin_urls() {
        assert_eq!(
            Site::for_url("https://www.linkedin.com/jobs/view/123"),
            Site::LinkedIn
        );
    }

    #[test]
    fn routes_indeed_urls() {
        assert_eq!(
            Site::for_url("https://www.indeed.com/viewjob?jk=abc"),
            Site::Indeed
        );
    }

    #[test]
    fn routes_glassdoor_urls() {
        assert_eq!(
            Site::for_url("https://www.glassdoor.com/job-listing/x"),
            Site::Glassdoor
        );
    }

    #[test]
    fn unknown_hosts_fall_back_to_generic() {
        assert_eq!(Site::for_url("https://example.com/careers/42"), Site::Generic);
    }

    #[test]
    fn linkedin_wins_when_other_hosts_appear_elsewhere_in_url() {
        assert_eq!(
            Site::for_url("https://www.linkedin.com/jobs/view/123?src=indeed.com"),
            Site::LinkedIn
        );
    }

    #[test]
    fn host_matching_is_case_insensitive() {
        assert_eq!(Site::for_url("https://WWW.INDEED.COM/viewjob"), Site::Indeed);
    }

    #[test]
    fn every_strategy_returns_empty_record_on_blank_page() {
        let html = "<html><body></body></html>";
        for site in [Site::LinkedIn, Site::Indeed, Site::Glassdoor, Site::Generic] {
            assert!(site.extract(html).is_empty(), "{:?} should be empty", site);
        }
    }
}
