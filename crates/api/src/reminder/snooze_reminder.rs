use super::{find_owned_reminder, subscribers::RecalculateReminderCountOnChange, ReminderChange};
use crate::shared::usecase::{Subscriber, UseCase};
use reminders_domain::{InvalidReminderDateError, ID};
use reminders_infra::ReminderContext;
use thiserror::Error;

/// Pushes a `Reminder` a number of days into the future
#[derive(Debug)]
pub struct SnoozeReminderUseCase {
    pub reminder_id: ID,
    pub days: u32,
}

#[derive(Error, Debug)]
pub enum UseCaseErrors {
    #[error("A reminder with id: {0}, was not found.")]
    ReminderNotFound(ID),
    #[error("Invalid reminder date: {0}")]
    InvalidReminderDate(#[from] InvalidReminderDateError),
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for SnoozeReminderUseCase {
    type Response = ReminderChange;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SnoozeReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let mut change = find_owned_reminder(&self.reminder_id, ctx)
            .await?
            .ok_or(UseCaseErrors::ReminderNotFound(self.reminder_id))?;

        change.reminder.snooze(ctx.sys.now(), self.days)?;
        ctx.repos.reminders.save(&change.reminder).await?;

        Ok(change)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RecalculateReminderCountOnChange)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        reminder::get_active_reminders::GetActiveRemindersUseCase,
        shared::{
            test_helpers::{context_at, setup_reminders},
            usecase::execute,
        },
    };
    use chrono::{Duration, TimeZone, Utc};

    #[tokio::test]
    async fn snoozed_reminder_is_no_longer_due() {
        let now = Utc.with_ymd_and_hms(2022, 3, 1, 9, 0, 0).unwrap();
        let ctx = context_at(now);
        let seed = setup_reminders(&ctx).await;

        let res = execute(
            SnoozeReminderUseCase {
                reminder_id: ID::new(1),
                days: 2,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(res.reminder.reminder_date, now + Duration::days(2));
        assert_eq!(res.person_id, seed.person.id);

        let active = execute(GetActiveRemindersUseCase { as_of: None }, &ctx)
            .await
            .unwrap();
        assert!(active.iter().all(|a| a.reminder.id != ID::new(1)));

        // Snoozing does not change what counts as active
        let person = ctx.repos.people.find(&seed.person.id).await.unwrap().unwrap();
        assert_eq!(person.reminder_count, Some(3));
    }

    #[tokio::test]
    async fn snooze_out_of_range_is_rejected() {
        let now = Utc.with_ymd_and_hms(2022, 3, 1, 9, 0, 0).unwrap();
        let ctx = context_at(now);
        let seed = setup_reminders(&ctx).await;

        let res = execute(
            SnoozeReminderUseCase {
                reminder_id: ID::new(1),
                days: u32::MAX,
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::InvalidReminderDate(_))));

        let stored = ctx.repos.reminders.find(&ID::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.reminder_date, seed.date);
    }
}
