use super::{find_owned_reminder, subscribers::RecalculateReminderCountOnChange, ReminderChange};
use crate::shared::usecase::{Subscriber, UseCase};
use reminders_domain::{InvalidReminderDateError, ID};
use reminders_infra::ReminderContext;
use thiserror::Error;

/// Completes a `Reminder`, renewing `Reminder`s move on to their next date
#[derive(Debug)]
pub struct CompleteReminderUseCase {
    pub reminder_id: ID,
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
impl UseCase for CompleteReminderUseCase {
    type Response = ReminderChange;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CompleteReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let mut change = find_owned_reminder(&self.reminder_id, ctx)
            .await?
            .ok_or(UseCaseErrors::ReminderNotFound(self.reminder_id))?;

        change.reminder.complete()?;
        ctx.repos.reminders.save(&change.reminder).await?;

        Ok(change)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RecalculateReminderCountOnChange)]
    }
}
