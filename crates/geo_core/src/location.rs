use url::Url;

use crate::{ReturnLocation, StorageError};

/// Query parameter set by the payment provider's return redirect.
pub const PAYMENT_MARKER_PARAM: &str = "paid";

/// True when `location` carries `paid=1` in its query string.
pub fn has_payment_marker(location: &str) -> bool {
    Url::parse(location)
        .map(|url| {
            url.query_pairs()
                .any(|(key, value)| key == PAYMENT_MARKER_PARAM && value == "1")
        })
        .unwrap_or(false)
}

/// Removes every `paid` parameter from `location`, keeping the others in order.
pub fn strip_payment_marker(location: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(location)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != PAYMENT_MARKER_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
    Ok(url.to_string())
}

/// [`ReturnLocation`] backed by a URL string, e.g. the address the app was
/// opened with. Clearing the marker rewrites the stored URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlReturnLocation {
    location: String,
}

impl UrlReturnLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl ReturnLocation for UrlReturnLocation {
    fn has_payment_marker(&self) -> Result<bool, StorageError> {
        Ok(has_payment_marker(&self.location))
    }

    fn clear_payment_marker(&mut self) -> Result<(), StorageError> {
        let cleaned = strip_payment_marker(&self.location)
            .map_err(|err| StorageError::Malformed(format!("{}: {err}", self.location)))?;
        self.location = cleaned;
        Ok(())
    }
}
