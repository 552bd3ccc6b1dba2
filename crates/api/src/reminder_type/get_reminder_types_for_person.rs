use crate::shared::usecase::UseCase;
use reminders_domain::{Action, Person, ReminderType, Secured, ID};
use reminders_infra::ReminderContext;
use thiserror::Error;

/// Finds the active `ReminderType`s a `Person` is allowed to view
#[derive(Debug)]
pub struct GetReminderTypesForPersonUseCase {
    pub entity_type_id: Option<ID>,
    pub person: Person,
}

#[derive(Error, Debug)]
pub enum UseCaseErrors {
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetReminderTypesForPersonUseCase {
    type Response = Vec<ReminderType>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetReminderTypesForPerson";

    /// Runs in two steps which must stay separate: storage filters on what
    /// it can express (active, entity type), then the authorization rules
    /// are evaluated in memory over every materialized candidate.
    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let candidates = ctx
            .repos
            .reminder_types
            .find_active(self.entity_type_id)
            .await?;

        let authorized = candidates
            .into_iter()
            .filter(|t| t.is_authorized(Action::View, Some(&self.person)))
            .collect();

        Ok(authorized)
    }
}
