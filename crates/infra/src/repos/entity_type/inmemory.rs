use super::IEntityTypeRepo;
use crate::repos::shared::inmemory_repo::*;
use reminders_domain::{EntityType, ID};

pub struct InMemoryEntityTypeRepo {
    entity_types: Collection<EntityType>,
}

impl InMemoryEntityTypeRepo {
    pub fn new() -> Self {
        Self {
            entity_types: collection(),
        }
    }
}

#[async_trait::async_trait]
impl IEntityTypeRepo for InMemoryEntityTypeRepo {
    async fn insert(&self, entity_type: &EntityType) -> anyhow::Result<()> {
        insert(entity_type, &self.entity_types);
        Ok(())
    }

    async fn find_many(&self, entity_type_ids: &[ID]) -> anyhow::Result<Vec<EntityType>> {
        Ok(find_by(&self.entity_types, |t| entity_type_ids.contains(&t.id)))
    }
}
