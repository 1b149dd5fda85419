// ABOUTME: Generic fallback strategy for unrecognized hosts.
// ABOUTME: Derives position/company from the page title and scans for a salary pattern.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

use super::support;
use crate::result::JobPosting;

/// Splits a job-related title on its first separator: a hyphen, the word
/// "at", or a pipe. The right side stops at the next hyphen or pipe, so a
/// trailing segment like "- Remote" is dropped. When several separators are
/// present the first one wins; downstream consumers depend on that shape.
static TITLE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.*?)(?:\s*-\s*|\s+at\s+|\s*\|\s*)([^-|]+)").expect("title split regex")
});

/// Standalone currency-prefixed amount, optionally a range, optionally
/// suffixed with a pay-period unit.
static SALARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$[\d,]+(?:\s*-\s*\$[\d,]+)?(?:\s*/?\s*(?:year|yr|annual|hour|hr))?")
        .expect("salary regex")
});

/// Extract job-posting fields from an unrecognized page.
pub fn extract(html: &str) -> JobPosting {
    let doc = Html::parse_document(html);
    let mut record = JobPosting::default();

    if let Some(title) = support::first_text(&doc, &["title"]) {
        if support::title_is_job_related(&title) {
            if let Some(caps) = TITLE_SPLIT_RE.captures(&title) {
                record.position = caps[1].trim().to_string();
                record.company = caps[2].trim().to_string();
            }
        }
    }

    // First currency pattern anywhere in the page text, verbatim.
    if let Some(m) = SALARY_RE.find(html) {
        record.salary = m.as_str().to_string();
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(title: &str, body: &str) -> String {
        format!("<html><head><title>{}</title></head><body>{}</body></html>", title, body)
    }

    #[test]
    fn splits_title_on_hyphen() {
        let record = extract(&page("Senior Engineer - Acme Corp", ""));
        assert_eq!(record.position, "Senior Engineer");
        assert_eq!(record.company, "Acme Corp");
    }

    #[test]
    fn splits_title_on_the_word_at() {
        let record = extract(&page("UX Designer at Globex", ""));
        assert_eq!(record.position, "UX Designer");
        assert_eq!(record.company, "Globex");
    }

    #[test]
    fn splits_title_on_pipe() {
        let record = extract(&page("Product Manager | Initech", ""));
        assert_eq!(record.position, "Product Manager");
        assert_eq!(record.company, "Initech");
    }

    #[test]
    fn first_separator_wins_with_multiple_separators() {
        let record = extract(&page("Engineer - Acme - Remote", ""));
        assert_eq!(record.position, "Engineer");
        assert_eq!(record.company, "Acme");
    }

    #[test]
    fn title_without_role_keyword_yields_nothing() {
        let record = extract(&page("Welcome - Acme Corp", ""));
        assert_eq!(record.position, "");
        assert_eq!(record.company, "");
    }

    #[test]
    fn title_with_jobs_keyword_is_accepted() {
        let record = extract(&page("Jobs at Acme", ""));
        assert_eq!(record.position, "Jobs");
        assert_eq!(record.company, "Acme");
    }

    #[test]
    fn title_without_separator_yields_nothing() {
        let record = extract(&page("Software Engineer Openings", ""));
        assert_eq!(record.position, "");
        assert_eq!(record.company, "");
    }

    #[test]
    fn finds_salary_range_with_period() {
        let record = extract(&page("Careers", "<p>Pay: $90,000 - $120,000 / year</p>"));
        assert_eq!(record.salary, "$90,000 - $120,000 / year");
    }

    #[test]
    fn finds_single_salary_amount() {
        let record = extract(&page("Careers", "<p>Earn $45/hr today</p>"));
        assert_eq!(record.salary, "$45/hr");
    }

    #[test]
    fn first_salary_match_wins() {
        let record = extract(&page(
            "Careers",
            "<p>$60,000 base, up to $80,000 with bonus</p>",
        ));
        assert_eq!(record.salary, "$60,000");
    }

    #[test]
    fn unmatched_markup_yields_empty_record() {
        let record = extract("<html><head><title>About us</title></head><body></body></html>");
        assert!(record.is_empty());
    }
}
