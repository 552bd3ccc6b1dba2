use super::{subscribers::RecalculateReminderCountOnChange, ReminderChange};
use crate::shared::usecase::{Subscriber, UseCase};
use reminders_domain::{InvalidReminderDateError, Reminder, ID};
use reminders_infra::ReminderContext;
use thiserror::Error;

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub reminder: Reminder,
}

#[derive(Error, Debug)]
pub enum UseCaseErrors {
    #[error("A reminder type with id: {0}, was not found.")]
    ReminderTypeNotFound(ID),
    #[error("A person alias with id: {0}, was not found.")]
    PersonAliasNotFound(ID),
    #[error("Invalid reminder date: {0}")]
    InvalidReminderDate(#[from] InvalidReminderDateError),
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for CreateReminderUseCase {
    type Response = ReminderChange;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        self.reminder.validate_renew_period()?;

        let reminder_type_id = self.reminder.reminder_type_id;
        if ctx.repos.reminder_types.find(&reminder_type_id).await?.is_none() {
            return Err(UseCaseErrors::ReminderTypeNotFound(reminder_type_id));
        }
        let alias_id = self.reminder.person_alias_id;
        let alias = ctx
            .repos
            .people
            .find_alias(&alias_id)
            .await?
            .ok_or(UseCaseErrors::PersonAliasNotFound(alias_id))?;

        ctx.repos.reminders.insert(&self.reminder).await?;

        Ok(ReminderChange {
            reminder: self.reminder.clone(),
            person_id: alias.person_id,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RecalculateReminderCountOnChange)]
    }
}
