// ABOUTME: Glassdoor strategy extracting company and position only.
// ABOUTME: Deliberately minimal coverage; the remaining fields stay empty.

use scraper::Html;

use super::support;
use crate::result::JobPosting;

/// Extract job-posting fields from a Glassdoor page.
pub fn extract(html: &str) -> JobPosting {
    let doc = Html::parse_document(html);
    let mut record = JobPosting::default();

    if let Some(company) = support::first_text(&doc, &[r#"div[class*="employer"]"#]) {
        record.company = company;
    }

    if let Some(position) = support::first_text(&doc, &[r#"h1[class*="jobHeader"]"#]) {
        record.position = position;
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_company_and_position() {
        let html = r#"
            <div class="employerName employer">Umbrella Inc</div>
            <h1 class="jobHeaderTitle jobHeader">UX Designer</h1>
        "#;
        let record = extract(html);
        assert_eq!(record.company, "Umbrella Inc");
        assert_eq!(record.position, "UX Designer");
        assert_eq!(record.location, "");
        assert_eq!(record.description, "");
        assert_eq!(record.salary, "");
    }

    #[test]
    fn unmatched_markup_yields_empty_record() {
        let record = extract("<html><body><h2>Reviews</h2></body></html>");
        assert!(record.is_empty());
    }
}
