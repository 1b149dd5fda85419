// ABOUTME: Indeed strategy extracting company, position, location, and salary.
// ABOUTME: Description is never attempted for this source.

use scraper::Html;

use super::support;
use crate::result::JobPosting;

const COMPANY_SELECTORS: &[&str] = &[
    r#"[data-testid="inlineHeader-companyName"]"#,
    r#"span[class*="companyName"]"#,
];

const POSITION_SELECTORS: &[&str] = &[
    r#"h1[class*="jobsearch-JobInfoHeader-title"]"#,
    r#"[data-testid="jobsearch-JobInfoHeader-title"]"#,
];

const LOCATION_SELECTORS: &[&str] = &[r#"[data-testid="job-location"]"#];

const SALARY_SELECTORS: &[&str] = &[r#"[data-testid="salaryInfoAndJobType"]"#];

/// Extract job-posting fields from an Indeed page.
pub fn extract(html: &str) -> JobPosting {
    let doc = Html::parse_document(html);
    let mut record = JobPosting::default();

    if let Some(company) = support::first_text(&doc, COMPANY_SELECTORS) {
        record.company = company;
    }

    if let Some(position) = support::first_text(&doc, POSITION_SELECTORS) {
        record.position = position;
    }

    if let Some(location) = support::first_text(&doc, LOCATION_SELECTORS) {
        record.location = location;
    }

    // The salary element mixes salary and job type; only accept it when a
    // currency amount is actually present.
    if let Some(salary) = support::first_text(&doc, SALARY_SELECTORS) {
        if salary.contains('$') {
            record.salary = salary;
        }
    }

    record
}
