use crate::shared::usecase::UseCase;
use chrono::{DateTime, Utc};
use reminders_domain::ActiveReminder;
use reminders_infra::ReminderContext;
use thiserror::Error;

/// Finds the `Reminder`s of every `Person` that are due, used by the
/// scheduled job
#[derive(Debug)]
pub struct GetActiveRemindersUseCase {
    /// Defaults to the current time
    pub as_of: Option<DateTime<Utc>>,
}

#[derive(Error, Debug)]
pub enum UseCaseErrors {
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetActiveRemindersUseCase {
    type Response = Vec<ActiveReminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetActiveReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let as_of = self.as_of.unwrap_or_else(|| ctx.sys.now());
        let reminders = ctx.repos.reminders.find_active(as_of).await?;
        Ok(reminders)
    }
}
