//! Debounced serialization.
//!
//! `output()` cancels the pending run and schedules a new one `output_delay` from now; the
//! owner polls `take_due_output` from its tick, so a burst of edits yields one payload.

use std::time::{Duration, Instant};

use super::FormulaTree;
use crate::models::serialized::formula_to_string;

impl FormulaTree {
    pub fn set_output_delay(&mut self, delay: Duration) {
        self.output_delay = delay;
    }

    pub fn output(&mut self) {
        self.pending_output = Some(Instant::now() + self.output_delay);
    }

    pub fn has_pending_output(&self) -> bool {
        self.pending_output.is_some()
    }

    /// Returns whether a run was pending.
    pub fn cancel_output(&mut self) -> bool {
        self.pending_output.take().is_some()
    }

    /// Serialized formula when the pending run is due and the tree is valid.
    pub fn take_due_output(&mut self, now: Instant) -> Option<String> {
        let deadline = self.pending_output?;
        if now < deadline {
            return None;
        }
        self.pending_output = None;

        if !self.is_valid() {
            tracing::debug!(tree = self.id, "formula invalid, output suppressed");
            return None;
        }

        match formula_to_string(&self.get_formula()) {
            Ok(json) => Some(json),
            Err(err) => {
                tracing::error!(tree = self.id, error = %err, "serialize formula failed");
                None
            }
        }
    }
}
