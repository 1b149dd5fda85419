// ABOUTME: LinkedIn strategy extracting company, position, location, and description.
// ABOUTME: Salary is never attempted for this source.

use scraper::Html;

use super::support;
use crate::result::JobPosting;

/// How many characters of the description to keep.
const DESCRIPTION_LIMIT: usize = 200;

const COMPANY_SELECTORS: &[&str] = &[
    r#"span[class*="topcard__flavor"]"#,
    r#"a[class*="topcard__org-name-link"]"#,
];

const LOCATION_SELECTORS: &[&str] = &[r#"span[class*="topcard__flavor--bullet"]"#];

const DESCRIPTION_SELECTORS: &[&str] = &[r#"div[class*="description__text"]"#];

/// Extract job-posting fields from a LinkedIn page.
pub fn extract(html: &str) -> JobPosting {
    let doc = Html::parse_document(html);
    let mut record = JobPosting::default();

    if let Some(company) = support::first_text(&doc, COMPANY_SELECTORS) {
        record.company = company;
    }

    // Title heading first; any h1 carrying a role keyword as fallback.
    if let Some(position) = support::first_text(&doc, &[r#"h1[class*="topcard__title"]"#])
        .or_else(|| support::first_role_heading(&doc))
    {
        record.position = position;
    }

    if let Some(location) = support::first_text(&doc, LOCATION_SELECTORS) {
        record.location = location;
    }

    if let Some(description) = support::first_text(&doc, DESCRIPTION_SELECTORS) {
        record.description = support::truncate_with_ellipsis(&description, DESCRIPTION_LIMIT);
    }

    record
}
