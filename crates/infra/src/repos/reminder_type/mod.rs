mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderTypeRepo;
pub(crate) use postgres::{to_auth_rules, to_notification_type};
pub use postgres::PostgresReminderTypeRepo;
use reminders_domain::{ReminderType, ID};

#[async_trait::async_trait]
pub trait IReminderTypeRepo: Send + Sync {
    async fn insert(&self, reminder_type: &ReminderType) -> anyhow::Result<()>;
    async fn save(&self, reminder_type: &ReminderType) -> anyhow::Result<()>;
    async fn find(&self, reminder_type_id: &ID) -> anyhow::Result<Option<ReminderType>>;
    async fn find_many(&self, reminder_type_ids: &[ID]) -> anyhow::Result<Vec<ReminderType>>;
    /// Active `ReminderType`s, restricted to one `EntityType` when given
    async fn find_active(&self, entity_type_id: Option<ID>) -> anyhow::Result<Vec<ReminderType>>;
}
