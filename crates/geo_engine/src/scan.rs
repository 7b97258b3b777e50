use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use geo_core::{GeoResult, MockError};
use geo_logging::{geo_debug, geo_error, geo_info};

use crate::mock::{mock_error, mock_result_for, processing_delay, should_simulate_error};

pub type ScanOutcome = Result<GeoResult, MockError>;

/// Something that can score a URL after some latency.
pub trait ScanBackend: Send + Sync {
    fn delay(&self) -> Duration;
    fn analyze(&self, url: &str) -> ScanOutcome;
}

/// Canned backend: fixture by URL hash, roughly 10% simulated failures and a
/// 2-3 s pause.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockBackend;

impl ScanBackend for MockBackend {
    fn delay(&self) -> Duration {
        processing_delay()
    }

    fn analyze(&self, url: &str) -> ScanOutcome {
        if should_simulate_error(url) {
            Err(mock_error())
        } else {
            Ok(mock_result_for(url))
        }
    }
}

/// Waits out the backend's delay, then asks it for the outcome.
pub async fn run_scan(backend: &dyn ScanBackend, url: &str) -> ScanOutcome {
    let delay = backend.delay();
    geo_debug!("Scanning {} (simulated delay {:?})", url, delay);
    tokio::time::sleep(delay).await;
    backend.analyze(url)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEvent {
    pub url: String,
    pub outcome: ScanOutcome,
}

enum ScanCommand {
    Run { url: String },
}

/// Runs scans on a background tokio runtime and hands outcomes back over a
/// channel. There is no cancellation: a scan nobody waits for still finishes
/// and its event is simply never read.
pub struct ScanHandle {
    cmd_tx: mpsc::Sender<ScanCommand>,
    event_rx: mpsc::Receiver<ScanEvent>,
}

impl ScanHandle {
    pub fn new(backend: Arc<dyn ScanBackend>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ScanCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_time()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    geo_error!("Failed to start scan runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
            // Let in-flight scans deliver before the runtime is dropped.
            runtime.shutdown_timeout(Duration::from_secs(5));
        });

        Self { cmd_tx, event_rx }
    }

    pub fn enqueue(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ScanCommand::Run { url: url.into() });
    }

    pub fn try_recv(&self) -> Option<ScanEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next outcome; `None` once the worker is gone.
    pub fn recv(&self) -> Option<ScanEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    backend: &dyn ScanBackend,
    command: ScanCommand,
    event_tx: mpsc::Sender<ScanEvent>,
) {
    match command {
        ScanCommand::Run { url } => {
            let outcome = run_scan(backend, &url).await;
            match &outcome {
                Ok(result) => geo_info!("Scan of {} scored {}", url, result.overall_score),
                Err(err) => geo_info!("Scan of {} failed: {}", url, err),
            }
            let _ = event_tx.send(ScanEvent { url, outcome });
        }
    }
}
