use crate::{
    reminder::recalculate_reminder_count::RecalculateReminderCountUseCase,
    shared::usecase::execute,
};
use itertools::Itertools;
use reminders_infra::ReminderContext;
use std::time::Duration;
use tokio::{task::JoinHandle, time::interval};
use tracing::{error, info, info_span};
use tracing_futures::Instrument;

/// Periodically reconciles the cached reminder counts of every `Person`
/// that either has due `Reminder`s or already has a cached count.
pub fn start_reminder_count_job(ctx: ReminderContext) -> JoinHandle<()> {
    let period = Duration::from_secs(ctx.config.reminder_count_job_interval_secs.max(1));

    tokio::spawn(
        async move {
            let mut interval = interval(period);
            loop {
                interval.tick().await;
                let updated = recalculate_reminder_counts(&ctx).await;
                info!("Updated the reminder count of {} people", updated);
            }
        }
        .instrument(info_span!("Reminder count job")),
    )
}

/// Returns how many cached counts were rewritten.
///
/// Only owners of due `Reminder`s and people with a non-zero cached count
/// are visited. A `Person` with an unset or zero cache whose `Reminder`s are
/// all in the future is skipped until one of them becomes due, even though
/// the count itself ignores dates. Reactivating a `ReminderType` therefore
/// does not reach such people right away.
pub async fn recalculate_reminder_counts(ctx: &ReminderContext) -> usize {
    let due_owners = match ctx.repos.reminders.find_active(ctx.sys.now()).await {
        Ok(active) => active.into_iter().map(|a| a.person.id).collect::<Vec<_>>(),
        Err(e) => {
            error!("Unable to load due reminders: {:?}", e);
            return 0;
        }
    };
    let cached = match ctx.repos.people.find_ids_with_reminder_count().await {
        Ok(ids) => ids,
        Err(e) => {
            error!("Unable to load cached reminder counts: {:?}", e);
            return 0;
        }
    };

    let mut updated = 0;
    for person_id in due_owners.into_iter().chain(cached).unique() {
        let usecase = RecalculateReminderCountUseCase { person_id };
        // Failures are logged by `execute`, keep going with the rest
        if let Ok(sync) = execute(usecase, ctx).await {
            if sync.needs_write() {
                updated += 1;
            }
        }
    }
    updated
}
