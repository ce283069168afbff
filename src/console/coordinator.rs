//! Break response that records the user's decision for the main loop.

use std::cell::Cell;

use tracing::info;

use crate::timer::BreakResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Postpone,
    Skip,
}

/// Holds at most one pending decision; the latest click wins.
#[derive(Debug, Default)]
pub struct LimitCoordinator {
    pending: Cell<Option<Decision>>,
}

impl LimitCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<Decision> {
        self.pending.take()
    }
}

impl BreakResponse for LimitCoordinator {
    fn postpone_break(&self) {
        info!("daily limit postponed");
        self.pending.set(Some(Decision::Postpone));
    }

    fn skip_break(&self) {
        info!("daily limit skipped for today");
        self.pending.set(Some(Decision::Skip));
    }
}
