use crate::shared::usecase::UseCase;
use reminders_domain::{Reminder, ReminderFilter, ReminderQuery, ID};
use reminders_infra::ReminderContext;
use thiserror::Error;

/// Looks up the `Reminder`s of a `Person`, narrowed by the given filters
#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub person_id: ID,
    pub filter: ReminderFilter,
}

#[derive(Error, Debug)]
pub enum UseCaseErrors {
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let query = ReminderQuery::select(self.person_id, self.filter);
        let reminders = ctx.repos.reminders.find_by_query(&query).await?;
        Ok(reminders)
    }
}
