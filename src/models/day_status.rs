use super::action::ClockAction;
use serde::Serialize;

/// Which of the four actions have already been recorded for a
/// (user, day) pair. Derived by scanning the day's events; drives the
/// ledger gate and the post-admission response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayStatusFlags {
    pub has_entry: bool,
    pub has_lunch_start: bool,
    pub has_lunch_end: bool,
    pub has_exit: bool,
}

impl DayStatusFlags {
    pub fn from_actions<I: IntoIterator<Item = ClockAction>>(actions: I) -> Self {
        let mut flags = Self::default();
        for a in actions {
            flags.set(a);
        }
        flags
    }

    pub fn set(&mut self, action: ClockAction) {
        match action {
            ClockAction::Entry => self.has_entry = true,
            ClockAction::LunchStart => self.has_lunch_start = true,
            ClockAction::LunchEnd => self.has_lunch_end = true,
            ClockAction::Exit => self.has_exit = true,
        }
    }

    /// Copy with the given action's flag set, for the next-state response.
    pub fn with(mut self, action: ClockAction) -> Self {
        self.set(action);
        self
    }
}
