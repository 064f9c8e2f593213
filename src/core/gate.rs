//! Per-(user, day) event-sequence gate.
//!
//! Decides whether a new action is admissible given which actions the
//! day has already recorded. Entry must come first, lunch must be
//! started before it ends, and no action repeats. Lunch is optional:
//! Exit only requires Entry. The gate never persists anything; it
//! returns the next-state flags for the caller.

use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::day_status::DayStatusFlags;

fn duplicate(action: ClockAction) -> AppError {
    AppError::DuplicateAction(action.as_str().to_string())
}

fn out_of_order(action: ClockAction, requires: ClockAction) -> AppError {
    AppError::OutOfOrder {
        action: action.as_str().to_string(),
        requires: requires.as_str().to_string(),
    }
}

/// Evaluate `action` against the day's current status. On admission,
/// returns the updated flags (the existing ones with the new action's
/// flag set). Must be called with a fresh snapshot of the day's
/// actions; the store's uniqueness constraint backstops any race
/// between concurrent submissions.
pub fn admit(status: DayStatusFlags, action: ClockAction) -> AppResult<DayStatusFlags> {
    match action {
        ClockAction::Entry => {
            if status.has_entry {
                return Err(duplicate(action));
            }
        }
        ClockAction::LunchStart => {
            if !status.has_entry {
                return Err(out_of_order(action, ClockAction::Entry));
            }
            if status.has_lunch_start {
                return Err(duplicate(action));
            }
        }
        ClockAction::LunchEnd => {
            if !status.has_lunch_start {
                return Err(out_of_order(action, ClockAction::LunchStart));
            }
            if status.has_lunch_end {
                return Err(duplicate(action));
            }
        }
        ClockAction::Exit => {
            if !status.has_entry {
                return Err(out_of_order(action, ClockAction::Entry));
            }
            if status.has_exit {
                return Err(duplicate(action));
            }
        }
    }

    Ok(status.with(action))
}
