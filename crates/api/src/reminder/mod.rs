pub mod complete_reminder;
pub mod create_reminder;
pub mod delete_reminder;
pub mod get_active_reminders;
pub mod get_reminders;
pub mod recalculate_reminder_count;
pub mod snooze_reminder;
mod subscribers;

use reminders_domain::{Reminder, ID};
use reminders_infra::ReminderContext;

/// A `Reminder` that was modified together with the `Person` owning it
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderChange {
    pub reminder: Reminder,
    pub person_id: ID,
}

/// Finds a `Reminder` and resolves the `Person` behind its alias
async fn find_owned_reminder(
    reminder_id: &ID,
    ctx: &ReminderContext,
) -> anyhow::Result<Option<ReminderChange>> {
    let reminder = match ctx.repos.reminders.find(reminder_id).await? {
        Some(reminder) => reminder,
        None => return Ok(None),
    };
    let alias = ctx.repos.people.find_alias(&reminder.person_alias_id).await?;

    Ok(alias.map(|alias| ReminderChange {
        reminder,
        person_id: alias.person_id,
    }))
}
