mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{IEntityTypeRepo, IPersonRepo, IReminderRepo, IReminderTypeRepo, Repos};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl ReminderContext {
    async fn create(config: Config) -> anyhow::Result<Self> {
        let repos = match &config.database_url {
            Some(connection_string) => {
                Repos::create_postgres(connection_string, config.database_max_connections).await?
            }
            None => {
                warn!("No database configured, reminders will only be kept in memory.");
                Repos::create_inmemory()
            }
        };
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
        })
    }

    /// Context backed by in-memory repositories, useful for testing
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config {
                database_url: None,
                database_max_connections: 1,
                reminder_count_job_interval_secs: 60,
            },
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ReminderContext> {
    ReminderContext::create(Config::new()).await
}
