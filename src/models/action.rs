use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// The four clock actions a user can record in a day, in sequence order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ClockAction {
    Entry,
    LunchStart,
    LunchEnd,
    Exit,
}

impl ClockAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::Entry => "Entry",
            ClockAction::LunchStart => "LunchStart",
            ClockAction::LunchEnd => "LunchEnd",
            ClockAction::Exit => "Exit",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ClockAction::Entry => "entry",
            ClockAction::LunchStart => "lunch_start",
            ClockAction::LunchEnd => "lunch_end",
            ClockAction::Exit => "exit",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entry" => Some(ClockAction::Entry),
            "lunch_start" => Some(ClockAction::LunchStart),
            "lunch_end" => Some(ClockAction::LunchEnd),
            "exit" => Some(ClockAction::Exit),
            _ => None,
        }
    }

    /// Normalize a submitted label to the canonical action.
    ///
    /// Tolerates the label variants the field devices have been seen to
    /// send ("ENTRY", "lunch-start", "Lunch Begin", "LUNCH STOP", ...).
    /// Anything that does not normalize to one of the four actions is
    /// rejected with `InvalidAction` instead of being carried along as
    /// an open-ended bucket.
    pub fn parse(label: &str) -> AppResult<Self> {
        let folded: String = label
            .to_uppercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        if folded.starts_with("ENTRY") {
            return Ok(ClockAction::Entry);
        }
        if folded.starts_with("EXIT") {
            return Ok(ClockAction::Exit);
        }
        match folded.as_str() {
            "LUNCHSTART" | "LUNCHBEGIN" => Ok(ClockAction::LunchStart),
            "LUNCHEND" | "LUNCHSTOP" => Ok(ClockAction::LunchEnd),
            _ => Err(AppError::InvalidAction(label.to_string())),
        }
    }
}

impl std::fmt::Display for ClockAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
