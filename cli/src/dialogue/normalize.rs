//! # Input Normalization
//!
//! File: cli/src/dialogue/normalize.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/cyberbot
//!
//! Lower-cases and trims raw input, and pulls the payload out of interest
//! declarations such as "I'm interested in privacy".
//!

/// Interest trigger prefixes, tried in this order.
const INTEREST_PREFIXES: &[&str] = &[
    "i'm interested in",
    "i am interested in",
    "i'm also interested in",
    "add interest",
    "i like",
];

/// Trims and lower-cases `raw`. Absent or whitespace-only input yields `""`.
pub fn normalize(raw: Option<&str>) -> String {
    raw.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

/// # Extract Interest (`extract_interest`)
///
/// Tests already-normalized text against the interest prefixes and returns
/// the remainder after the first matching prefix. Surrounding whitespace, a
/// leading `:` and trailing `.`, `!` or `?` are stripped. A prefix with
/// nothing after it is not a declaration.
pub fn extract_interest(normalized: &str) -> Option<String> {
    let rest = strip_interest_prefix(normalized)?;
    let interest = rest
        .trim()
        .trim_start_matches(':')
        .trim_end_matches(['.', '!', '?'])
        .trim();
    if interest.is_empty() {
        None
    } else {
        Some(interest.to_string())
    }
}

/// Whether `normalized` starts with an interest prefix, even one with no
/// payload after it ("i'm interested in").
pub fn is_interest_declaration(normalized: &str) -> bool {
    strip_interest_prefix(normalized).is_some()
}

/// Remainder after the first matching prefix. The prefix must end at a word
/// boundary, so "i likewise" is not "i like" + "wise".
fn strip_interest_prefix(normalized: &str) -> Option<&str> {
    INTEREST_PREFIXES.iter().find_map(|prefix| {
        normalized
            .strip_prefix(prefix)
            .filter(|rest| !rest.starts_with(|c: char| c.is_alphanumeric()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize(Some("  What is PHISHING?  ")), "what is phishing?");
        assert_eq!(normalize(Some("\t \n")), "");
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["  Hello There ", "EXIT", "", "   ", "Ünïcode Straße  ", "yes"] {
            let once = normalize(Some(raw));
            assert_eq!(normalize(Some(&once)), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn extract_interest_matches_each_prefix() {
        assert_eq!(extract_interest("i'm interested in privacy"), Some("privacy".into()));
        assert_eq!(extract_interest("i am interested in firewalls"), Some("firewalls".into()));
        assert_eq!(
            extract_interest("i'm also interested in vpns"),
            Some("vpns".into())
        );
        assert_eq!(extract_interest("add interest: backups"), Some("backups".into()));
        assert_eq!(extract_interest("i like password managers."), Some("password managers".into()));
    }

    #[test]
    fn extract_interest_ignores_empty_payload() {
        assert_eq!(extract_interest("i'm interested in"), None);
        assert_eq!(extract_interest("i like   !"), None);
        assert_eq!(extract_interest("add interest:"), None);
    }

    #[test]
    fn extract_interest_requires_prefix_at_start() {
        assert_eq!(extract_interest("tell me what i like"), None);
        assert_eq!(extract_interest("what is phishing?"), None);
        assert_eq!(extract_interest("i likewise need help"), None);
        assert_eq!(extract_interest("i'm interested insofar as it helps"), None);
    }

    #[test]
    fn bare_prefix_is_still_a_declaration() {
        assert!(is_interest_declaration("i'm interested in"));
        assert!(is_interest_declaration("add interest:"));
        assert!(is_interest_declaration("i like vpns"));
        assert!(!is_interest_declaration("i likewise"));
        assert!(!is_interest_declaration("privacy"));
    }
}
