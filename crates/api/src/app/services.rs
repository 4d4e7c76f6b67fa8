use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pokertracker_ledger::Ledger;

/// The one ledger for this process.
///
/// Writers hold the lock for the whole append-and-recompute, so concurrent
/// requests can't lose updates. Ledger mutations check every fallible step
/// before touching a player, so a poisoned lock still guards a consistent
/// ledger and is recovered.
#[derive(Debug)]
pub struct AppServices {
    ledger: RwLock<Ledger>,
}

impl AppServices {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: RwLock::new(ledger),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.ledger.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new(Ledger::new())
    }
}
