use crate::{Reminder, ReminderType};

/// Outcome of reconciling the cached reminder count of a `Person`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderCountSync {
    /// The cached value was already correct, nothing needs to be written
    Unchanged(i32),
    /// The cached value was stale and has to be persisted
    Updated { previous: i32, current: i32 },
}

impl ReminderCountSync {
    pub fn count(&self) -> i32 {
        match self {
            Self::Unchanged(count) => *count,
            Self::Updated { current, .. } => *current,
        }
    }

    pub fn needs_write(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Counts the `Reminder`s that are active: not complete and belonging to an
/// active `ReminderType`. The reminder date is not considered.
pub fn count_active_reminders<'a, I>(reminders: I) -> i32
where
    I: IntoIterator<Item = (&'a Reminder, &'a ReminderType)>,
{
    reminders
        .into_iter()
        .filter(|(reminder, reminder_type)| reminder.is_active(reminder_type))
        .count() as i32
}
