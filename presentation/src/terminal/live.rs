//! Exclusive live-display slot.
//!
//! Only one thinking indicator may animate at a time. Indicators claim the
//! slot on start and release it when the claim is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use strands_application::RenderError;

#[derive(Debug, Clone, Default)]
pub(crate) struct LiveSlot(Arc<AtomicBool>);

impl LiveSlot {
    pub(crate) fn claim(&self) -> Result<LiveClaim, RenderError> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| RenderError::LiveDisplayActive)?;
        Ok(LiveClaim(Arc::clone(&self.0)))
    }

    pub(crate) fn is_claimed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub(crate) struct LiveClaim(Arc<AtomicBool>);

impl Drop for LiveClaim {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
