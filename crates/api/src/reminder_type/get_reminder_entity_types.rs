use crate::shared::usecase::UseCase;
use reminders_domain::{EntityType, ID};
use reminders_infra::ReminderContext;
use thiserror::Error;

/// Finds the `EntityType`s a `Person` has `Reminder`s for
#[derive(Debug)]
pub struct GetReminderEntityTypesUseCase {
    pub person_id: ID,
}

#[derive(Error, Debug)]
pub enum UseCaseErrors {
    #[error("Storage error: {0}")]
    StorageError(#[from] anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for GetReminderEntityTypesUseCase {
    type Response = Vec<EntityType>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetReminderEntityTypes";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let entity_type_ids = ctx
            .repos
            .reminders
            .find_entity_type_ids_by_person(&self.person_id)
            .await?;
        if entity_type_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entity_types = ctx.repos.entity_types.find_many(&entity_type_ids).await?;
        Ok(entity_types)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::{
        test_helpers::{setup_reminders, GROUP_ENTITY_TYPE, PERSON_ENTITY_TYPE},
        usecase::execute,
    };
    use reminders_domain::{PersonAlias, Reminder};

    #[tokio::test]
    async fn distinct_entity_types_of_person() {
        let ctx = ReminderContext::create_inmemory();
        let seed = setup_reminders(&ctx).await;

        let usecase = GetReminderEntityTypesUseCase {
            person_id: seed.person.id,
        };
        let entity_types = execute(usecase, &ctx).await.unwrap();
        assert_eq!(
            entity_types.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![ID::new(PERSON_ENTITY_TYPE)]
        );

        // A group reminder through a second alias adds the group entity type
        ctx.repos
            .people
            .insert_alias(&PersonAlias::new(ID::new(11), seed.person.id))
            .await
            .unwrap();
        let reminder = Reminder::new(ID::new(40), seed.charter.id, ID::new(11), ID::new(900), seed.date);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let usecase = GetReminderEntityTypesUseCase {
            person_id: seed.person.id,
        };
        let mut ids = execute(usecase, &ctx)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect::<Vec<_>>();
        ids.sort();
        assert_eq!(
            ids,
            vec![ID::new(PERSON_ENTITY_TYPE), ID::new(GROUP_ENTITY_TYPE)]
        );

        let usecase = GetReminderEntityTypesUseCase {
            person_id: ID::new(404),
        };
        assert!(execute(usecase, &ctx).await.unwrap().is_empty());
    }
}
