use std::time::Duration;

use geo_core::{GeoResult, MockError};
use rand::Rng;

use crate::fixtures::fixtures;

const MOCK_ERROR_MESSAGE: &str = "Unable to analyze website. Please try again.";

/// Range of the simulated backend latency, in milliseconds.
pub const PROCESSING_DELAY_MS: std::ops::Range<u64> = 2000..3000;

/// 32-bit rolling string hash (`h * 31 + unit` over UTF-16 code units,
/// wrapping as `i32`), returned as its absolute value.
///
/// Kept bit-for-bit stable: fixture selection and error simulation are
/// observable through it.
pub fn hash(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}

/// Deterministic mock result: one of the three fixtures picked by URL hash,
/// with `url` stamped in.
pub fn mock_result_for(url: &str) -> GeoResult {
    let index = (hash(url) % 3) as usize;
    let mut result = fixtures()[index].clone();
    result.url = url.to_string();
    result
}

/// Flags roughly one URL in ten as failing, always the same ones.
pub fn should_simulate_error(url: &str) -> bool {
    hash(&format!("{url}error")) % 10 == 0
}

pub fn mock_error() -> MockError {
    MockError {
        message: MOCK_ERROR_MESSAGE.to_string(),
        retryable: true,
    }
}

/// Random pacing delay for the UI. Not used for any decision.
pub fn processing_delay() -> Duration {
    let millis = rand::rng().random_range(PROCESSING_DELAY_MS);
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(hash(""), 0);
        assert_eq!(hash("a"), 97);
        assert_eq!(hash("hello"), 99_162_322);
    }

    #[test]
    fn hash_wraps_and_takes_absolute_value() {
        // Overflows i32 and lands negative before the absolute value.
        assert_eq!(hash("https://acme.io/pricing"), 2_103_034_270);
        assert_eq!(hash("https://example.com"), 632_849_614);
    }

    #[test]
    fn hash_uses_utf16_code_units() {
        // U+1F600 is a surrogate pair: 0xD83D 0xDE00.
        let expected = (0xD83D_i32.wrapping_mul(31).wrapping_add(0xDE00)).unsigned_abs();
        assert_eq!(hash("\u{1F600}"), expected);
    }

    #[test]
    fn processing_delay_is_within_range() {
        for _ in 0..50 {
            let delay = processing_delay();
            assert!(delay >= Duration::from_millis(2000));
            assert!(delay < Duration::from_millis(3000));
        }
    }
}
