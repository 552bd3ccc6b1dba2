mod inmemory;
mod postgres;

pub use inmemory::InMemoryEntityTypeRepo;
pub use postgres::PostgresEntityTypeRepo;
use reminders_domain::{EntityType, ID};

#[async_trait::async_trait]
pub trait IEntityTypeRepo: Send + Sync {
    async fn insert(&self, entity_type: &EntityType) -> anyhow::Result<()>;
    async fn find_many(&self, entity_type_ids: &[ID]) -> anyhow::Result<Vec<EntityType>>;
}
