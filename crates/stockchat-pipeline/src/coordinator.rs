//! Coordinator for the collection state machine
//!
//! One operation, [`advance`], handles both ends of a run: called on a fresh
//! state it initializes the slots and opens the run; called after the steps
//! it decides completion. It only reads and writes the state record and never
//! fails.

use stockchat_core::{PipelineStatus, StockState};
use tracing::debug;

/// Advance the state machine by at most one transition
///
/// The legal transitions come from [`PipelineStatus::successor`]; this
/// function only decides whether the current status is ready to take its
/// successor:
///
/// - `init`: always ready. Resets all three slots to empty on the way out,
///   so slots become "absent" rather than undefined regardless of what the
///   caller put in them.
/// - `in_progress`: ready iff every slot is occupied (data or sentinel);
///   otherwise the state is left untouched.
/// - `complete`: terminal, no-op.
pub fn advance(state: &mut StockState) {
    if state.status.is_terminal() {
        return;
    }

    let ready = match state.status {
        PipelineStatus::Init => {
            state.clear_slots();
            true
        }
        PipelineStatus::InProgress => state.all_slots_filled(),
        PipelineStatus::Complete => false,
    };
    if !ready {
        return;
    }

    if let Some(next) = state.status.successor() {
        let from = state.status;
        state.status = next;
        debug!(symbol = %state.symbol, %from, to = %next, "status advanced");
    }
}
