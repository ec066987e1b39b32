//! Pure field validators for the contact form
//!
//! Each validator takes the raw input and returns `Some(message)` on
//! failure, `None` when the field is acceptable. They hold no state and
//! know nothing about the view layer.

use std::fmt;

/// Recognized inquiry categories for the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryType {
    Clinic,
    Investor,
    Partner,
    Other,
}

impl InquiryType {
    pub const ALL: [InquiryType; 4] = [
        InquiryType::Clinic,
        InquiryType::Investor,
        InquiryType::Partner,
        InquiryType::Other,
    ];

    /// Wire value sent to the form backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::Clinic => "clinic",
            InquiryType::Investor => "investor",
            InquiryType::Partner => "partner",
            InquiryType::Other => "other",
        }
    }

    /// Human-readable option label for the select control.
    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::Clinic => "Clinic Director / Practitioner",
            InquiryType::Investor => "Investor / Angel",
            InquiryType::Partner => "Partner / Regulator",
            InquiryType::Other => "Other",
        }
    }

    /// Parse the exact wire value. Anything else is rejected, including
    /// case variants: the select control only ever produces these four.
    pub fn parse(value: &str) -> Option<InquiryType> {
        match value {
            "clinic" => Some(InquiryType::Clinic),
            "investor" => Some(InquiryType::Investor),
            "partner" => Some(InquiryType::Partner),
            "other" => Some(InquiryType::Other),
            _ => None,
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a name: 2–80 characters after trimming, ASCII letters,
/// whitespace, hyphens, and apostrophes only.
pub fn validate_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < 2 {
        return Some("Name must be at least 2 characters".to_string());
    }
    if trimmed.chars().count() > 80 {
        return Some("Name must be less than 80 characters".to_string());
    }
    let allowed = |c: char| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\'';
    if !trimmed.chars().all(allowed) {
        return Some("Name can only contain letters, spaces, hyphens, and apostrophes".to_string());
    }
    None
}

/// Validate an email address: a syntactic `local@domain.tld` sanity check,
/// not RFC validation and not a deliverability check.
pub fn validate_email(raw: &str) -> Option<String> {
    let trimmed = raw.trim().to_lowercase();
    if email_shape_ok(&trimmed) {
        None
    } else {
        Some("Please enter a valid email address".to_string())
    }
}

fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    if value.chars().filter(|c| *c == '@').count() != 1 {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // The domain needs an interior dot with something after it.
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a message body: 20–2000 characters after trimming, inclusive
/// on both bounds.
pub fn validate_message(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len < 20 {
        return Some("Message must be at least 20 characters".to_string());
    }
    if len > 2000 {
        return Some("Message must be less than 2000 characters".to_string());
    }
    None
}

/// Validate the inquiry category against the closed set.
pub fn validate_inquiry(raw: &str) -> Option<String> {
    if InquiryType::parse(raw).is_some() {
        None
    } else {
        Some("Please select a valid type".to_string())
    }
}

/// Best-effort removal of angle-bracket tag shapes (`<...>`) from the
/// message body before transmission. This is a transport hygiene step, not
/// an XSS defense: downstream consumers must not rely on it as a security
/// boundary.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                // No closing bracket: nothing tag-shaped left to strip.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_plain_names() {
            assert_eq!(validate_name("Jane Doe"), None);
            assert_eq!(validate_name("O'Neill"), None);
            assert_eq!(validate_name("Anne-Marie"), None);
            assert_eq!(validate_name("  Al  "), None);
        }

        #[test]
        fn test_rejects_too_short() {
            assert!(validate_name("J").is_some());
            assert!(validate_name("").is_some());
            // Whitespace collapses to nothing after trimming
            assert!(validate_name("   ").is_some());
        }

        #[test]
        fn test_boundary_lengths() {
            assert_eq!(validate_name("Jo"), None);
            let eighty = "a".repeat(80);
            assert_eq!(validate_name(&eighty), None);
            let eighty_one = "a".repeat(81);
            assert!(validate_name(&eighty_one).is_some());
        }

        #[test]
        fn test_rejects_digits_and_symbols() {
            assert!(validate_name("Jane3").is_some());
            assert!(validate_name("Jane!").is_some());
            assert!(validate_name("jane@doe").is_some());
        }

        #[test]
        fn test_trims_before_measuring() {
            // 81 chars raw but 80 after trim
            let padded = format!(" {}", "a".repeat(80));
            assert_eq!(validate_name(&padded), None);
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_minimal_shape() {
            assert_eq!(validate_email("a@b.co"), None);
            assert_eq!(validate_email("first.last@example.org"), None);
        }

        #[test]
        fn test_normalizes_case_and_whitespace() {
            assert_eq!(validate_email("  USER@EXAMPLE.COM  "), None);
        }

        #[test]
        fn test_rejects_missing_dot() {
            assert!(validate_email("a@b").is_some());
        }

        #[test]
        fn test_rejects_interior_whitespace() {
            assert!(validate_email("a b@c.com").is_some());
        }

        #[test]
        fn test_rejects_missing_or_doubled_at() {
            assert!(validate_email("abc.com").is_some());
            assert!(validate_email("a@@b.com").is_some());
            assert!(validate_email("a@b@c.com").is_some());
        }

        #[test]
        fn test_rejects_empty_parts() {
            assert!(validate_email("@b.com").is_some());
            assert!(validate_email("a@").is_some());
            assert!(validate_email("a@b.").is_some());
            assert!(validate_email("a@.com").is_some());
        }
    }

    mod message {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejects_short_message() {
            assert!(validate_message("short").is_some());
        }

        #[test]
        fn test_boundaries_are_inclusive() {
            let twenty = "a".repeat(20);
            assert_eq!(validate_message(&twenty), None);
            let two_thousand = "a".repeat(2000);
            assert_eq!(validate_message(&two_thousand), None);
        }

        #[test]
        fn test_rejects_over_limit() {
            let long = "a".repeat(2001);
            assert!(validate_message(&long).is_some());
        }

        #[test]
        fn test_nineteen_chars_fails() {
            let nineteen = "a".repeat(19);
            assert!(validate_message(&nineteen).is_some());
        }

        #[test]
        fn test_trims_before_measuring() {
            let padded = format!("  {}  ", "a".repeat(19));
            assert!(validate_message(&padded).is_some());
        }
    }

    mod inquiry {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_all_known_categories() {
            for inquiry in InquiryType::ALL {
                assert_eq!(validate_inquiry(inquiry.as_str()), None);
            }
        }

        #[test]
        fn test_rejects_unknown_and_empty() {
            assert!(validate_inquiry("").is_some());
            assert!(validate_inquiry("press").is_some());
            // Exact match only: the select never produces case variants
            assert!(validate_inquiry("Clinic").is_some());
        }

        #[test]
        fn test_parse_round_trips() {
            for inquiry in InquiryType::ALL {
                assert_eq!(InquiryType::parse(inquiry.as_str()), Some(inquiry));
            }
        }
    }

    mod strip {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_removes_simple_tags() {
            assert_eq!(strip_html("hello <b>world</b>"), "hello world");
        }

        #[test]
        fn test_removes_tags_with_attributes() {
            assert_eq!(
                strip_html("<a href=\"https://x.test\">link</a> text"),
                "link text"
            );
        }

        #[test]
        fn test_keeps_unclosed_bracket() {
            assert_eq!(strip_html("a < b and c"), "a < b and c");
        }

        #[test]
        fn test_plain_text_untouched() {
            assert_eq!(strip_html("no markup here"), "no markup here");
        }

        #[test]
        fn test_empty_tag_removed() {
            assert_eq!(strip_html("x<>y"), "xy");
        }
    }
}
