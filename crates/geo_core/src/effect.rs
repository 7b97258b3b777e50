#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the paid flag to persistent storage.
    PersistPaid(bool),
    /// Remove the payment-return marker from the entry location.
    ClearReturnMarker,
    /// Run a scan for `url` and report back with `ScanCompleted`/`ScanFailed`.
    RunScan { url: String },
}
