use crate::{EnvironmentReport, GeoResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Startup facts gathered from storage, location and environment.
    Initialized {
        stored_paid: bool,
        payment_returned: bool,
        environment: EnvironmentReport,
    },
    /// User submitted a URL for scoring.
    ScanStarted(String),
    /// Scan backend produced a result.
    ScanCompleted(GeoResult),
    /// Scan backend failed with a user-facing message.
    ScanFailed(String),
    /// User cleared the current scan.
    ScanReset,
    /// Paid flag changed (upgrade or downgrade).
    PaidChanged(bool),
    /// Paid user asked for the "improve score" re-score.
    ImproveScore,
    /// Fallback for placeholder wiring.
    NoOp,
}
