mod job_schedulers;
pub mod reminder;
pub mod reminder_type;
mod shared;

pub use job_schedulers::recalculate_reminder_counts;
use job_schedulers::start_reminder_count_job;
use reminders_infra::ReminderContext;
pub use shared::usecase::{execute, Subscriber, UseCase};
use tracing::info;

pub struct Application {
    context: ReminderContext,
}

impl Application {
    pub fn new(context: ReminderContext) -> Self {
        Self { context }
    }

    /// Runs the background jobs until the process receives ctrl-c
    pub async fn start(self) -> anyhow::Result<()> {
        let reminder_count_job = start_reminder_count_job(self.context.clone());
        info!(
            "Reconciling reminder counts every {} seconds",
            self.context.config.reminder_count_job_interval_secs
        );

        tokio::signal::ctrl_c().await?;
        info!("Shutting down");
        reminder_count_job.abort();

        Ok(())
    }
}
