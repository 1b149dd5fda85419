// ABOUTME: Shared matching primitives for the site strategies.
// ABOUTME: Ordered-selector text extraction, role-keyword scanning, and truncation.

//! Shared field-matching primitives.
//!
//! Key behaviors:
//! - Selectors are tried in order; first non-empty match wins.
//! - Whitespace is normalized (collapsed to single spaces, trimmed).
//! - Empty strings are treated as no match.
//! - An unparsable selector is skipped, not an error.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Role keywords used to recognize a job-title heading.
pub const ROLE_KEYWORDS: &[&str] = &["Engineer", "Developer", "Manager", "Analyst", "Designer"];

static ROLE_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(ROLE_KEYWORDS)
        .expect("role keyword matcher")
});

// "Job" also covers the plural "Jobs".
static TITLE_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(["Engineer", "Developer", "Manager", "Analyst", "Designer", "Job"])
        .expect("title keyword matcher")
});

/// Returns true if the text contains one of the role keywords.
pub fn contains_role_keyword(text: &str) -> bool {
    ROLE_MATCHER.is_match(text)
}

/// Returns true if a page title looks job-related (role keywords plus "Job"/"Jobs").
pub fn title_is_job_related(text: &str) -> bool {
    TITLE_MATCHER.is_match(text)
}

/// Normalizes whitespace by collapsing runs of whitespace into single spaces.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts the normalized inner text of an element, markup stripped.
pub fn element_text(el: &ElementRef) -> String {
    let text: String = el.text().collect::<Vec<_>>().join(" ");
    normalize_whitespace(&text)
}

/// Extracts text from the first selector that yields a non-empty match.
///
/// Iterates through selectors in order, returning the first non-empty
/// normalized text found. A selector that fails to parse is skipped and
/// logged at debug level; against third-party markup this is a no-match,
/// never a failure.
pub fn first_text(doc: &Html, selectors: &[&str]) -> Option<String> {
    for &sel_str in selectors {
        let sel = match Selector::parse(sel_str) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!(selector = sel_str, error = %e, "skipping unparsable selector");
                continue;
            }
        };

        for el in doc.select(&sel) {
            let normalized = element_text(&el);
            if !normalized.is_empty() {
                return Some(normalized);
            }
        }
    }
    None
}

/// Finds the first `<h1>` whose text contains a role keyword.
pub fn first_role_heading(doc: &Html) -> Option<String> {
    let sel = Selector::parse("h1").ok()?;
    for el in doc.select(&sel) {
        let text = element_text(&el);
        if !text.is_empty() && contains_role_keyword(&text) {
            return Some(text);
        }
    }
    None
}

/// Hard-truncates text to `limit` characters, appending "..." only when
/// truncation occurred. Character-based, never splits a code point.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_text_prefers_earlier_selector() {
        let doc = Html::parse_document(
            r#"<div class="primary">First</div><div class="secondary">Second</div>"#,
        );
        let result = first_text(&doc, &[".primary", ".secondary"]);
        assert_eq!(result, Some("First".to_string()));
    }

    #[test]
    fn first_text_falls_back_when_first_selector_absent() {
        let doc = Html::parse_document(r#"<div class="secondary">Second</div>"#);
        let result = first_text(&doc, &[".primary", ".secondary"]);
        assert_eq!(result, Some("Second".to_string()));
    }

    #[test]
    fn first_text_skips_empty_elements() {
        let doc = Html::parse_document(
            r#"<div class="primary">   </div><div class="secondary">Filled</div>"#,
        );
        let result = first_text(&doc, &[".primary", ".secondary"]);
        assert_eq!(result, Some("Filled".to_string()));
    }

    #[test]
    fn first_text_no_match() {
        let doc = Html::parse_document("<p>nothing here</p>");
        assert_eq!(first_text(&doc, &[".a", ".b"]), None);
    }

    #[test]
    fn role_keywords_are_case_insensitive() {
        assert!(contains_role_keyword("senior software engineer"));
        assert!(contains_role_keyword("Product Manager"));
        assert!(!contains_role_keyword("Barista"));
    }

    #[test]
    fn title_keywords_include_job() {
        assert!(title_is_job_related("Jobs at Acme"));
        assert!(title_is_job_related("Job opening"));
        assert!(!title_is_job_related("About us"));
    }

    #[test]
    fn truncate_short_text_is_verbatim() {
        assert_eq!(truncate_with_ellipsis("short", 200), "short");
    }

    #[test]
    fn truncate_exact_limit_is_verbatim() {
        let text = "x".repeat(200);
        assert_eq!(truncate_with_ellipsis(&text, 200), text);
    }

    #[test]
    fn truncate_long_text_appends_ellipsis() {
        let text = "y".repeat(250);
        let truncated = truncate_with_ellipsis(&text, 200);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));
        assert!(text.starts_with(truncated.trim_end_matches("...")));
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        let text = "é".repeat(300);
        let truncated = truncate_with_ellipsis(&text, 200);
        assert_eq!(truncated.chars().count(), 203);
    }
}
