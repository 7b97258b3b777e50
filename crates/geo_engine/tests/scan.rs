use std::sync::Arc;
use std::time::Duration;

use geo_core::MockError;
use geo_engine::{
    mock_error, mock_result_for, run_scan, MockBackend, ScanBackend, ScanHandle, ScanOutcome,
};

/// Mock backend without the artificial pause.
struct InstantBackend;

impl ScanBackend for InstantBackend {
    fn delay(&self) -> Duration {
        Duration::ZERO
    }

    fn analyze(&self, url: &str) -> ScanOutcome {
        MockBackend.analyze(url)
    }
}

#[tokio::test(start_paused = true)]
async fn run_scan_waits_for_the_processing_delay() {
    let started = tokio::time::Instant::now();
    let outcome = run_scan(&MockBackend, "https://acme.io").await;

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(2000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(3000), "{elapsed:?}");
    assert_eq!(outcome, Ok(mock_result_for("https://acme.io")));
}

#[tokio::test(start_paused = true)]
async fn flagged_urls_fail_with_retryable_error() {
    let outcome = run_scan(&MockBackend, "https://example.com").await;

    let err: MockError = outcome.unwrap_err();
    assert_eq!(err, mock_error());
    assert!(err.retryable);
}

#[test]
fn handle_reports_every_enqueued_scan() {
    geo_logging::initialize_for_tests();
    let handle = ScanHandle::new(Arc::new(InstantBackend));
    handle.enqueue("https://acme.io");
    handle.enqueue("https://example.com");

    let mut events = vec![handle.recv().unwrap(), handle.recv().unwrap()];
    events.sort_by(|a, b| a.url.cmp(&b.url));

    assert_eq!(events[0].url, "https://acme.io");
    assert_eq!(events[0].outcome.as_ref().unwrap().overall_score, 61);
    assert_eq!(events[1].url, "https://example.com");
    assert!(events[1].outcome.is_err());
    assert!(handle.try_recv().is_none());
}
