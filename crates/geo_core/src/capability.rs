//! Platform capabilities the session store depends on.
//!
//! The store never touches files, browsers or URLs directly; it talks to
//! these traits so that failures arrive as ordinary `Result`s and tests can
//! substitute in-memory doubles.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored value is malformed: {0}")]
    Malformed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence for the paid flag (logical key `paid`).
pub trait PaidFlagStorage {
    /// Returns the stored flag; an absent value reads as `false`.
    fn load(&self) -> Result<bool, StorageError>;
    fn store(&mut self, paid: bool) -> Result<(), StorageError>;
}

/// Access to the location the app was entered through.
pub trait ReturnLocation {
    /// True when the app was entered via a payment-return marker.
    fn has_payment_marker(&self) -> Result<bool, StorageError>;
    /// Removes the marker so it is not processed again.
    fn clear_payment_marker(&mut self) -> Result<(), StorageError>;
}

/// In-memory paid flag. Clones share the same slot, so a test can keep a
/// handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<Cell<Option<bool>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(paid: bool) -> Self {
        let storage = Self::default();
        storage.slot.set(Some(paid));
        storage
    }

    /// Raw stored value; `None` when nothing was ever written.
    pub fn stored(&self) -> Option<bool> {
        self.slot.get()
    }
}

impl PaidFlagStorage for MemoryStorage {
    fn load(&self) -> Result<bool, StorageError> {
        Ok(self.slot.get().unwrap_or(false))
    }

    fn store(&mut self, paid: bool) -> Result<(), StorageError> {
        self.slot.set(Some(paid));
        Ok(())
    }
}

/// Location without any payment marker, for headless callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReturnLocation;

impl ReturnLocation for NoReturnLocation {
    fn has_payment_marker(&self) -> Result<bool, StorageError> {
        Ok(false)
    }

    fn clear_payment_marker(&mut self) -> Result<(), StorageError> {
        Ok(())
    }
}
