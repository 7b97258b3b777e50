use std::sync::OnceLock;

use geo_logging::geo_error;
use regex::Regex;

/// Accepted website input: optional scheme and `www.`, a hostname label,
/// one or more alphabetic TLD parts and an optional path. No ports, no IPs.
const SCAN_URL_PATTERN: &str = r"^(?:https?://)?(?:www\.)?[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z]{2,})+(?:/[^\s]*)?$";

fn scan_url_regex() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(SCAN_URL_PATTERN) {
            Ok(re) => Some(re),
            Err(err) => {
                geo_error!("Scan URL pattern failed to compile: {}", err);
                None
            }
        })
        .as_ref()
}

/// Whether `input` (after trimming) looks like a website the scanner accepts.
pub fn validate_scan_url(input: &str) -> bool {
    let input = input.trim();
    if input.is_empty() {
        return false;
    }
    scan_url_regex().is_some_and(|re| re.is_match(input))
}
