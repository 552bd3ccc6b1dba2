mod entity_type;
mod person;
mod reminder;
mod reminder_type;
mod shared;

pub use entity_type::IEntityTypeRepo;
use entity_type::{InMemoryEntityTypeRepo, PostgresEntityTypeRepo};
pub use person::IPersonRepo;
use person::{InMemoryPersonRepo, PostgresPersonRepo};
pub use reminder::IReminderRepo;
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
pub use reminder_type::IReminderTypeRepo;
use reminder_type::{InMemoryReminderTypeRepo, PostgresReminderTypeRepo};
use shared::inmemory_repo::collection;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
    pub reminder_types: Arc<dyn IReminderTypeRepo>,
    pub people: Arc<dyn IPersonRepo>,
    pub entity_types: Arc<dyn IEntityTypeRepo>,
}

impl Repos {
    pub async fn create_postgres(
        connection_string: &str,
        max_connections: u32,
    ) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            reminder_types: Arc::new(PostgresReminderTypeRepo::new(pool.clone())),
            people: Arc::new(PostgresPersonRepo::new(pool.clone())),
            entity_types: Arc::new(PostgresEntityTypeRepo::new(pool)),
        })
    }

    /// Repositories keeping everything in memory. The collections that
    /// reminder lookups join on are shared between the repositories.
    pub fn create_inmemory() -> Self {
        let reminder_types = collection();
        let people = collection();
        let aliases = collection();

        Self {
            reminders: Arc::new(InMemoryReminderRepo::new(
                reminder_types.clone(),
                aliases.clone(),
                people.clone(),
            )),
            reminder_types: Arc::new(InMemoryReminderTypeRepo::new(reminder_types)),
            people: Arc::new(InMemoryPersonRepo::new(people, aliases)),
            entity_types: Arc::new(InMemoryEntityTypeRepo::new()),
        }
    }
}
