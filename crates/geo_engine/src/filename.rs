use chrono::{NaiveDate, Utc};
use url::Url;

const FALLBACK_DOMAIN_LEN: usize = 20;

/// Download name `geo-analysis-{domain}-{YYYY-MM-DD}.csv`.
pub fn csv_filename(url: &str, date: NaiveDate) -> String {
    let domain = extract_domain(url);
    format!("geo-analysis-{domain}-{}.csv", date.format("%Y-%m-%d"))
}

/// [`csv_filename`] dated with the current UTC day.
pub fn csv_filename_today(url: &str) -> String {
    csv_filename(url, Utc::now().date_naive())
}

/// Filename-safe host of `url`. Inputs without an `http` prefix are treated
/// as `https://`; unparseable input falls back to its first 20 safe chars.
pub fn extract_domain(url: &str) -> String {
    let full = if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    match Url::parse(&full) {
        Ok(parsed) => sanitize(parsed.host_str().unwrap_or_default()),
        Err(_) => sanitize(url).chars().take(FALLBACK_DOMAIN_LEN).collect(),
    }
}

fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
        .collect()
}
