//! Validation primitives applied to command input before anything is sent
//! to the remote service.
//!
//! All functions are pure and never fail: checks return `bool`, and
//! [`limit_string`] truncates instead of rejecting.

use chrono::NaiveDateTime;
use url::Url;

/// Maximum length of a meeting or calendar title.
pub const MAX_TITLE_LEN: usize = 2000;

/// Maximum length of a meeting location.
pub const MAX_LOCATION_LEN: usize = 2000;

/// Maximum length of meeting or calendar details.
pub const MAX_DETAILS_LEN: usize = 10000;

/// Maximum length of a participant name.
pub const MAX_NAME_LEN: usize = 600;

/// chrono layout for `YYYY-MM-DD HH:MM AM|PM`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// URL schemes accepted for attachments.
const URL_SCHEMES: [&str; 2] = ["http", "https"];

/// Truncates `value` to at most `max_len` characters.
///
/// Lengths are counted in `char`s, so multi-byte text is never split inside
/// a code point. Strings already within the limit are returned unchanged.
///
/// # Examples
///
/// ```
/// use agenda_core::validation::limit_string;
///
/// assert_eq!(limit_string("standup", 5), "stand");
/// assert_eq!(limit_string("sync", 10), "sync");
/// ```
pub fn limit_string(value: &str, max_len: usize) -> String {
    match value.char_indices().nth(max_len) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}

/// Returns true iff `value` is `YYYY-MM-DD HH:MM AM|PM` naming a real
/// calendar date and a 12-hour clock time.
///
/// # Examples
///
/// ```
/// use agenda_core::validation::validate_date_time;
///
/// assert!(validate_date_time("2024-06-01 02:30 PM"));
/// assert!(!validate_date_time("2024-13-01 02:30 PM"));
/// assert!(!validate_date_time("not a date"));
/// ```
pub fn validate_date_time(value: &str) -> bool {
    has_date_time_shape(value) && NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).is_ok()
}

/// Checks the fixed-width layout chrono is lenient about (single-digit
/// fields, lowercase meridiem, signed years).
fn has_date_time_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 19 {
        return false;
    }

    let digits = [0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15];
    if !digits.iter().all(|&i| bytes[i].is_ascii_digit()) {
        return false;
    }

    bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b' '
        && bytes[13] == b':'
        && bytes[16] == b' '
        && matches!(&bytes[17..], b"AM" | b"PM")
}

/// Returns true iff `value` looks like `local@domain.tld`.
///
/// The local part allows letters, digits and `._%+-`. The domain needs at
/// least one dot, non-empty labels made of letters, digits and hyphens, and
/// an alphabetic top-level label of two or more characters.
///
/// # Examples
///
/// ```
/// use agenda_core::validation::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("a b@c.com"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let valid_labels = labels.iter().all(|label| {
        !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld = labels[labels.len() - 1];
    valid_labels && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Returns true iff `value` parses as an absolute `http` or `https` URL
/// with a host.
///
/// # Examples
///
/// ```
/// use agenda_core::validation::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/x"));
/// assert!(!is_valid_url("not a url"));
/// ```
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => URL_SCHEMES.contains(&url.scheme()) && url.host_str().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== limit_string ====================

    #[test]
    fn limit_string_truncates_long_input() {
        assert_eq!(limit_string("abcdef", 3), "abc");
    }

    #[test]
    fn limit_string_keeps_short_input() {
        assert_eq!(limit_string("abc", 3), "abc");
        assert_eq!(limit_string("abc", 10), "abc");
    }

    #[test]
    fn limit_string_zero_length() {
        assert_eq!(limit_string("abc", 0), "");
        assert_eq!(limit_string("", 0), "");
    }

    #[test]
    fn limit_string_counts_chars_not_bytes() {
        assert_eq!(limit_string("héllo", 2), "hé");
        assert_eq!(limit_string("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn limit_string_result_is_prefix_within_bound() {
        let long = "x".repeat(50);
        let samples = ["", "a", "meeting notes", "ünïcödé välüé", long.as_str()];
        for sample in samples {
            for n in 0..20 {
                let limited = limit_string(sample, n);
                assert!(limited.chars().count() <= n);
                assert!(sample.starts_with(&limited));
                if sample.chars().count() <= n {
                    assert_eq!(limited, sample);
                }
            }
        }
    }

    // ==================== validate_date_time ====================

    #[test]
    fn date_time_accepts_afternoon() {
        assert!(validate_date_time("2024-06-01 02:30 PM"));
    }

    #[test]
    fn date_time_accepts_boundaries() {
        assert!(validate_date_time("2024-02-29 12:00 AM"));
        assert!(validate_date_time("2023-12-31 11:59 PM"));
        assert!(validate_date_time("2024-01-01 01:00 AM"));
    }

    #[test]
    fn date_time_rejects_bad_month() {
        assert!(!validate_date_time("2024-13-01 02:30 PM"));
    }

    #[test]
    fn date_time_rejects_bad_hour() {
        assert!(!validate_date_time("2024-06-01 25:30 PM"));
        assert!(!validate_date_time("2024-06-01 13:30 PM"));
        assert!(!validate_date_time("2024-06-01 00:30 AM"));
    }

    #[test]
    fn date_time_rejects_impossible_day() {
        assert!(!validate_date_time("2023-02-29 10:00 AM"));
        assert!(!validate_date_time("2024-04-31 10:00 AM"));
    }

    #[test]
    fn date_time_rejects_loose_layouts() {
        assert!(!validate_date_time("2024-6-1 2:30 PM"));
        assert!(!validate_date_time("2024-06-01 02:30 pm"));
        assert!(!validate_date_time("2024-06-01 14:30"));
        assert!(!validate_date_time("2024-06-01T02:30 PM"));
        assert!(!validate_date_time(" 2024-06-01 02:30 PM"));
    }

    #[test]
    fn date_time_rejects_garbage() {
        assert!(!validate_date_time("not a date"));
        assert!(!validate_date_time(""));
        assert!(!validate_date_time("日本語日本語日本"));
    }

    // ==================== is_valid_email ====================

    #[test]
    fn email_accepts_conventional_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("ann.smith+work@mail.example.org"));
        assert!(is_valid_email("o_k-1%x@sub-domain.co.uk"));
    }

    #[test]
    fn email_rejects_domain_without_dot() {
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn email_rejects_whitespace() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("ab@c .com"));
        assert!(!is_valid_email(" ab@c.com"));
    }

    #[test]
    fn email_rejects_empty_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b..com"));
    }

    #[test]
    fn email_rejects_multiple_at_signs() {
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn email_rejects_short_or_numeric_tld() {
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b.123"));
    }

    // ==================== is_valid_url ====================

    #[test]
    fn url_accepts_http_and_https() {
        assert!(is_valid_url("https://example.com/x"));
        assert!(is_valid_url("http://localhost:8080/files/a.pdf"));
    }

    #[test]
    fn url_rejects_non_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("/relative/path"));
    }

    #[test]
    fn url_rejects_unrecognized_schemes() {
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("mailto:ann@x.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
    }
}
