mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;
use reminders_domain::{ActiveReminder, Reminder, ReminderQuery, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    /// `Reminder`s matching one of the `ReminderQuery` shapes, in storage order
    async fn find_by_query(&self, query: &ReminderQuery) -> anyhow::Result<Vec<Reminder>>;
    /// Incomplete `Reminder`s of active `ReminderType`s that are due at `as_of`,
    /// across all `Person`s. The `ReminderType` and `Person` are loaded
    /// together with each `Reminder`.
    async fn find_active(&self, as_of: DateTime<Utc>) -> anyhow::Result<Vec<ActiveReminder>>;
    /// Distinct `EntityType`s of the `ReminderType`s used by the `Reminder`s of a `Person`
    async fn find_entity_type_ids_by_person(&self, person_id: &ID) -> anyhow::Result<Vec<ID>>;
}
