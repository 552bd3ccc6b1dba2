use super::{find_owned_reminder, subscribers::RecalculateReminderCountOnChange, ReminderChange};
use crate::shared::usecase::{Subscriber, UseCase};
use reminders_domain::ID;
use reminders_infra::ReminderContext;
use thiserror::Error;

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Error, Debug)]
pub enum UseCaseErrors {
    #[error("A reminder with id: {0}, was not found.")]
    ReminderNotFound(ID),
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for DeleteReminderUseCase {
    type Response = ReminderChange;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        // The owner has to be resolved before the reminder is gone
        let change = find_owned_reminder(&self.reminder_id, ctx)
            .await?
            .ok_or(UseCaseErrors::ReminderNotFound(self.reminder_id))?;

        match ctx.repos.reminders.delete(&self.reminder_id).await? {
            Some(reminder) => Ok(ReminderChange {
                reminder,
                person_id: change.person_id,
            }),
            None => Err(UseCaseErrors::ReminderNotFound(self.reminder_id)),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RecalculateReminderCountOnChange)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::{test_helpers::setup_reminders, usecase::execute};

    #[tokio::test]
    async fn deletes_reminder_and_refreshes_count() {
        let ctx = ReminderContext::create_inmemory();
        let seed = setup_reminders(&ctx).await;

        let res = execute(
            DeleteReminderUseCase {
                reminder_id: ID::new(6),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(res.person_id, seed.other.id);
        assert!(ctx.repos.reminders.find(&ID::new(6)).await.unwrap().is_none());

        let other = ctx.repos.people.find(&seed.other.id).await.unwrap().unwrap();
        // Unset cache and zero reminders are equal, so nothing is written
        assert_eq!(other.reminder_count, None);

        let res = execute(
            DeleteReminderUseCase {
                reminder_id: ID::new(6),
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::ReminderNotFound(_))));
    }
}
