use std::sync::Arc;

use geo_core::{Effect, Msg};
use geo_engine::{ScanBackend, ScanEvent, ScanHandle};
use geo_logging::{geo_info, geo_warn};

/// Executes the effects the session store hands back and turns their
/// outcomes into messages.
pub struct EffectRunner {
    scans: ScanHandle,
    in_flight: usize,
}

impl EffectRunner {
    pub fn new(backend: Arc<dyn ScanBackend>) -> Self {
        Self {
            scans: ScanHandle::new(backend),
            in_flight: 0,
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RunScan { url } => {
                    geo_info!("RunScan url_len={} url={}", url.len(), url);
                    self.scans.enqueue(url);
                    self.in_flight += 1;
                }
                Effect::PersistPaid(_) | Effect::ClearReturnMarker => {
                    // The store runs these itself; seeing one here is a wiring bug.
                    geo_warn!("Ignoring store-local effect {:?}", effect);
                }
            }
        }
    }

    /// Blocks for the next scan outcome. `None` when nothing is pending.
    pub fn next_msg(&mut self) -> Option<Msg> {
        if self.in_flight == 0 {
            return None;
        }
        let event = self.scans.recv()?;
        self.in_flight -= 1;
        Some(outcome_to_msg(event))
    }
}

fn outcome_to_msg(event: ScanEvent) -> Msg {
    match event.outcome {
        Ok(result) => Msg::ScanCompleted(result),
        Err(err) => {
            geo_warn!("Scan of {} failed: {}", event.url, err);
            Msg::ScanFailed(err.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use geo_engine::{MockBackend, ScanOutcome};

    use super::*;

    struct InstantBackend;

    impl ScanBackend for InstantBackend {
        fn delay(&self) -> Duration {
            Duration::ZERO
        }

        fn analyze(&self, url: &str) -> ScanOutcome {
            MockBackend.analyze(url)
        }
    }

    #[test]
    fn run_scan_effect_comes_back_as_message() {
        let mut runner = EffectRunner::new(Arc::new(InstantBackend));
        assert!(runner.next_msg().is_none());

        runner.enqueue(vec![Effect::RunScan {
            url: "https://acme.io".to_string(),
        }]);
        match runner.next_msg() {
            Some(Msg::ScanCompleted(result)) => assert_eq!(result.overall_score, 61),
            other => panic!("unexpected {other:?}"),
        }
        assert!(runner.next_msg().is_none());
    }

    #[test]
    fn failed_scan_becomes_error_message() {
        let mut runner = EffectRunner::new(Arc::new(InstantBackend));
        runner.enqueue(vec![Effect::RunScan {
            url: "https://example.com".to_string(),
        }]);

        assert_eq!(
            runner.next_msg(),
            Some(Msg::ScanFailed(
                "Unable to analyze website. Please try again.".to_string()
            ))
        );
    }
}
