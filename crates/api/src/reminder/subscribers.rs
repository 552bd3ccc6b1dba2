use super::{recalculate_reminder_count::RecalculateReminderCountUseCase, ReminderChange};
use crate::shared::usecase::{execute, Subscriber, UseCase};
use reminders_infra::ReminderContext;

/// Refreshes the cached reminder count of the owner of a modified `Reminder`
pub struct RecalculateReminderCountOnChange;

#[async_trait::async_trait]
impl<U> Subscriber<U> for RecalculateReminderCountOnChange
where
    U: UseCase<Response = ReminderChange>,
{
    async fn notify(&self, e: &ReminderChange, ctx: &ReminderContext) {
        let recalculate = RecalculateReminderCountUseCase {
            person_id: e.person_id,
        };

        // Sideeffect, ignore result
        let _ = execute(recalculate, ctx).await;
    }
}
