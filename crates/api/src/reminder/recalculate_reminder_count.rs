use crate::shared::usecase::UseCase;
use itertools::Itertools;
use reminders_domain::{count_active_reminders, ReminderCountSync, ReminderQuery, ReminderType, ID};
use reminders_infra::ReminderContext;
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// Recomputes the number of active `Reminder`s of a `Person` and
/// persists it only when it differs from the cached value.
#[derive(Debug)]
pub struct RecalculateReminderCountUseCase {
    pub person_id: ID,
}

#[derive(Error, Debug)]
pub enum UseCaseErrors {
    #[error("A person with id: {0}, was not found.")]
    PersonNotFound(ID),
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for RecalculateReminderCountUseCase {
    type Response = ReminderCountSync;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "RecalculateReminderCount";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let mut person = ctx
            .repos
            .people
            .find(&self.person_id)
            .await?
            .ok_or(UseCaseErrors::PersonNotFound(self.person_id))?;

        let reminders = ctx
            .repos
            .reminders
            .find_by_query(&ReminderQuery::Person {
                person_id: person.id,
            })
            .await?;
        let reminder_type_ids = reminders
            .iter()
            .map(|r| r.reminder_type_id)
            .unique()
            .collect::<Vec<_>>();
        let reminder_types: HashMap<ID, ReminderType> = ctx
            .repos
            .reminder_types
            .find_many(&reminder_type_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let fresh = count_active_reminders(
            reminders
                .iter()
                .filter_map(|r| reminder_types.get(&r.reminder_type_id).map(|t| (r, t))),
        );

        let sync = person.sync_reminder_count(fresh);
        if let ReminderCountSync::Updated { previous, current } = sync {
            ctx.repos
                .people
                .save_reminder_count(&person.id, current)
                .await?;
            info!(
                "Reminder count of person {} changed from {} to {}",
                person.id, previous, current
            );
        }

        Ok(sync)
    }
}
