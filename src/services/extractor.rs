//! Submission extraction from issue bodies.
//!
//! Issue bodies are free text; submitters embed a JSON object either in
//! a ```json fenced code block or bare in the body. The extractor
//! locates the first balanced object with a character scanner rather
//! than a regex, so nested objects and braces inside string literals do
//! not truncate the span.

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::domain::models::{SubmissionRecord, TrackedIssue};

/// Opening fence for a labeled JSON code block.
const JSON_FENCE: &str = "```json";

/// Closing fence.
const FENCE: &str = "```";

/// Extract the submission record embedded in an issue body.
///
/// Returns `None` — after logging — when the body is empty, contains no
/// JSON object, or the object fails to parse. The caller skips the
/// issue and continues; a bad body never aborts the run.
///
/// On success the originating issue number is attached to the record
/// (field `issue_number`) and retained, so the site checker can update
/// the issue's labels later.
pub fn extract_submission(issue: &TrackedIssue) -> Option<SubmissionRecord> {
    let body = match issue.body.as_deref() {
        Some(b) if !b.trim().is_empty() => b,
        _ => {
            debug!(issue = issue.number, "issue has no body; skipping");
            return None;
        }
    };

    // Prefer a fenced ```json block when one exists; otherwise scan the
    // whole body.
    let candidate = fenced_json_block(body).unwrap_or(body);

    let Some(span) = first_balanced_object(candidate) else {
        info!(issue = issue.number, "no JSON object found in issue body");
        return None;
    };

    let mut fields: Map<String, Value> = match serde_json::from_str(span) {
        Ok(fields) => fields,
        Err(err) => {
            warn!(
                issue = issue.number,
                error = %err,
                "embedded JSON failed to parse; skipping issue"
            );
            return None;
        }
    };

    // The typed field wins over any issue_number the submitter wrote.
    fields.remove("issue_number");

    Some(SubmissionRecord {
        issue_number: Some(issue.number),
        fields,
    })
}

/// The contents of the first ```json fenced code block, if any.
fn fenced_json_block(body: &str) -> Option<&str> {
    let fence_start = body.find(JSON_FENCE)?;
    let after_label = &body[fence_start + JSON_FENCE.len()..];
    // The fence label runs to the end of its line.
    let content_start = after_label.find('\n')? + 1;
    let content = &after_label[content_start..];
    let end = content.find(FENCE)?;
    Some(&content[..end])
}

/// Find the first balanced JSON object span in `text`.
///
/// Scans from the first `{`, tracking brace depth, string state, and
/// escape sequences. Returns `None` when no `{` exists or the braces
/// never balance.
fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    // Braces and quotes are ASCII, so a byte scan is safe in UTF-8 text.
    for (i, &b) in text.as_bytes().iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(number: u64, body: &str) -> TrackedIssue {
        TrackedIssue {
            number,
            body: Some(body.to_string()),
            labels: vec![],
        }
    }

    #[test]
    fn test_extracts_from_fenced_block() {
        let body = "Please add my site!\n\n```json\n{ \"url\": \"https://example.com\", \"title\": \"My Blog\" }\n```\n\nThanks!";
        let record = extract_submission(&issue(12, body)).unwrap();
        assert_eq!(record.issue_number, Some(12));
        assert_eq!(record.url(), Some("https://example.com"));
        assert_eq!(record.fields.get("title").unwrap(), "My Blog");
    }

    #[test]
    fn test_extracts_bare_object_without_fence() {
        let body = "here is my submission { \"url\": \"https://a.example\" } ok?";
        let record = extract_submission(&issue(5, body)).unwrap();
        assert_eq!(record.url(), Some("https://a.example"));
    }

    #[test]
    fn test_nested_objects_do_not_truncate_the_span() {
        let body = r#"{ "url": "https://n.example", "author": { "name": "li", "links": { "x": "y" } } }"#;
        let record = extract_submission(&issue(1, body)).unwrap();
        assert_eq!(record.url(), Some("https://n.example"));
        let author = record.fields.get("author").unwrap();
        assert_eq!(author["links"]["x"], "y");
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let body = r#"{ "url": "https://b.example", "note": "curly {braces} \"quoted\" inside" }"#;
        let record = extract_submission(&issue(2, body)).unwrap();
        assert_eq!(
            record.fields.get("note").unwrap(),
            "curly {braces} \"quoted\" inside"
        );
    }

    #[test]
    fn test_all_original_fields_are_preserved() {
        let body = r#"```json
{ "url": "https://p.example", "title": "t", "screenshot": "s.png", "tags": ["a", "b"], "extra": 7 }
```"#;
        let record = extract_submission(&issue(9, body)).unwrap();
        assert_eq!(record.fields.len(), 5);
        assert_eq!(record.fields.get("tags").unwrap()[1], "b");
        assert_eq!(record.fields.get("extra").unwrap(), 7);
    }

    #[test]
    fn test_submitter_issue_number_is_overridden() {
        let body = r#"{ "url": "https://x.example", "issue_number": 999 }"#;
        let record = extract_submission(&issue(4, body)).unwrap();
        assert_eq!(record.issue_number, Some(4));
        assert!(!record.fields.contains_key("issue_number"));
    }

    #[test]
    fn test_malformed_json_is_skipped() {
        let body = "```json\n{ \"url\": \"missing end quote }\n```";
        assert!(extract_submission(&issue(6, body)).is_none());
    }

    #[test]
    fn test_unbalanced_braces_are_skipped() {
        assert!(extract_submission(&issue(7, "{ \"url\": \"https://u.example\"")).is_none());
    }

    #[test]
    fn test_body_without_json_is_skipped() {
        assert!(extract_submission(&issue(8, "just words, no json here")).is_none());
    }

    #[test]
    fn test_empty_and_missing_bodies_are_skipped() {
        assert!(extract_submission(&issue(10, "   \n  ")).is_none());
        let no_body = TrackedIssue {
            number: 11,
            body: None,
            labels: vec![],
        };
        assert!(extract_submission(&no_body).is_none());
    }

    #[test]
    fn test_non_object_json_is_skipped() {
        // The scanner only matches object spans; an array body has none.
        assert!(extract_submission(&issue(13, "[1, 2, 3]")).is_none());
    }

    #[test]
    fn test_fenced_block_wins_over_earlier_bare_braces() {
        let body = "template {placeholder}\n```json\n{ \"url\": \"https://f.example\" }\n```";
        let record = extract_submission(&issue(14, body)).unwrap();
        assert_eq!(record.url(), Some("https://f.example"));
    }

    #[test]
    fn test_unclosed_fence_falls_back_to_body_scan() {
        let body = "```json\n{ \"url\": \"https://open.example\" }";
        let record = extract_submission(&issue(15, body)).unwrap();
        assert_eq!(record.url(), Some("https://open.example"));
    }

    #[test]
    fn test_first_balanced_object_on_multibyte_text() {
        let body = "提交站点 → { \"url\": \"https://cn.example\", \"title\": \"博客\" } 谢谢";
        let record = extract_submission(&issue(16, body)).unwrap();
        assert_eq!(record.fields.get("title").unwrap(), "博客");
    }
}
