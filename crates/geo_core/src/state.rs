use serde::{Deserialize, Serialize};

use crate::view_model::SessionViewModel;
use crate::GeoResult;

/// Lifecycle of the current scan. Result and error live inside the variant,
/// so at most one of them exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanStatus {
    #[default]
    Idle,
    Loading,
    Done(GeoResult),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanState {
    pub url: String,
    pub status: ScanStatus,
}

impl ScanState {
    pub fn result(&self) -> Option<&GeoResult> {
        match &self.status {
            ScanStatus::Done(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ScanStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Outcome of validating the environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl EnvironmentReport {
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

impl Default for EnvironmentReport {
    fn default() -> Self {
        Self::from_findings(Vec::new(), Vec::new())
    }
}

/// The whole client session: paid flag, environment report and current scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    paid: bool,
    scan: ScanState,
    environment: EnvironmentReport,
    dirty: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paid(&self) -> bool {
        self.paid
    }

    pub fn scan(&self) -> &ScanState {
        &self.scan
    }

    pub fn environment(&self) -> &EnvironmentReport {
        &self.environment
    }

    pub fn result(&self) -> Option<&GeoResult> {
        self.scan.result()
    }

    pub fn view(&self) -> SessionViewModel {
        SessionViewModel::from_state(self)
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_paid(&mut self, paid: bool) {
        self.paid = paid;
        self.dirty = true;
    }

    pub(crate) fn set_environment(&mut self, environment: EnvironmentReport) {
        self.environment = environment;
        self.dirty = true;
    }

    pub(crate) fn set_scan(&mut self, url: String, status: ScanStatus) {
        self.scan = ScanState { url, status };
        self.dirty = true;
    }

    pub(crate) fn set_status(&mut self, status: ScanStatus) {
        self.scan.status = status;
        self.dirty = true;
    }

    pub(crate) fn result_mut(&mut self) -> Option<&mut GeoResult> {
        match &mut self.scan.status {
            ScanStatus::Done(result) => Some(result),
            _ => None,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
