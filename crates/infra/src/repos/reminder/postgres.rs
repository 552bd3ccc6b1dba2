use super::IReminderRepo;
use crate::repos::{
    person::PersonRaw,
    reminder_type::{to_auth_rules, to_notification_type},
};
use chrono::{DateTime, Utc};
use reminders_domain::{ActiveReminder, Reminder, ReminderQuery, ReminderType, ID};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_id: i64,
    reminder_type_id: i64,
    person_alias_id: i64,
    entity_id: i64,
    note: Option<String>,
    reminder_date: DateTime<Utc>,
    is_complete: bool,
    renew_period_days: Option<i32>,
    renew_max_count: Option<i32>,
    renew_current_count: i32,
}

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        Self {
            id: raw.reminder_id.into(),
            reminder_type_id: raw.reminder_type_id.into(),
            person_alias_id: raw.person_alias_id.into(),
            entity_id: raw.entity_id.into(),
            note: raw.note,
            reminder_date: raw.reminder_date,
            is_complete: raw.is_complete,
            renew_period_days: raw.renew_period_days,
            renew_max_count: raw.renew_max_count,
            renew_current_count: raw.renew_current_count,
        }
    }
}

/// A `Reminder` row joined with its reminder type (prefixed with `rt_`)
/// and its owning person
#[derive(Debug, FromRow)]
struct ActiveReminderRaw {
    #[sqlx(flatten)]
    reminder: ReminderRaw,
    rt_name: String,
    rt_description: Option<String>,
    rt_entity_type_id: i64,
    rt_is_active: bool,
    rt_notification_type: String,
    rt_ordering: i32,
    rt_auth_rules: serde_json::Value,
    #[sqlx(flatten)]
    person: PersonRaw,
}

impl TryFrom<ActiveReminderRaw> for ActiveReminder {
    type Error = anyhow::Error;

    fn try_from(raw: ActiveReminderRaw) -> anyhow::Result<Self> {
        let reminder_type = ReminderType {
            id: raw.reminder.reminder_type_id.into(),
            name: raw.rt_name,
            description: raw.rt_description,
            entity_type_id: raw.rt_entity_type_id.into(),
            is_active: raw.rt_is_active,
            notification_type: to_notification_type(&raw.rt_notification_type)?,
            order: raw.rt_ordering,
            auth_rules: to_auth_rules(raw.rt_auth_rules)?,
        };
        Ok(Self {
            reminder: raw.reminder.into(),
            reminder_type,
            person: raw.person.into(),
        })
    }
}

const SELECT_BY_PERSON: &str = r#"
    SELECT r.* FROM reminders AS r
    INNER JOIN reminder_types AS rt ON rt.reminder_type_id = r.reminder_type_id
    INNER JOIN person_aliases AS pa ON pa.person_alias_id = r.person_alias_id
    WHERE pa.person_id = "#;

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_id, reminder_type_id, person_alias_id, entity_id, note, reminder_date,
            is_complete, renew_period_days, renew_max_count, renew_current_count)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(reminder.id.inner())
        .bind(reminder.reminder_type_id.inner())
        .bind(reminder.person_alias_id.inner())
        .bind(reminder.entity_id.inner())
        .bind(&reminder.note)
        .bind(reminder.reminder_date)
        .bind(reminder.is_complete)
        .bind(reminder.renew_period_days)
        .bind(reminder.renew_max_count)
        .bind(reminder.renew_current_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;

        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET reminder_type_id = $2,
            person_alias_id = $3,
            entity_id = $4,
            note = $5,
            reminder_date = $6,
            is_complete = $7,
            renew_period_days = $8,
            renew_max_count = $9,
            renew_current_count = $10
            WHERE reminder_id = $1
            "#,
        )
        .bind(reminder.id.inner())
        .bind(reminder.reminder_type_id.inner())
        .bind(reminder.person_alias_id.inner())
        .bind(reminder.entity_id.inner())
        .bind(&reminder.note)
        .bind(reminder.reminder_date)
        .bind(reminder.is_complete)
        .bind(reminder.renew_period_days)
        .bind(reminder.renew_max_count)
        .bind(reminder.renew_current_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;

        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let raw = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_id = $1
            "#,
        )
        .bind(reminder_id.inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to find reminder with id: {:?}. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })?;

        Ok(raw.map(|r| r.into()))
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let raw = sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders AS r
            WHERE r.reminder_id = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to delete reminder with id: {:?}. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })?;

        Ok(raw.map(|r| r.into()))
    }

    async fn find_by_query(&self, query: &ReminderQuery) -> anyhow::Result<Vec<Reminder>> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_BY_PERSON);
        builder.push_bind(query.person_id().inner());
        if let Some(entity_type_id) = query.entity_type_id() {
            builder
                .push(" AND rt.entity_type_id = ")
                .push_bind(entity_type_id.inner());
        }
        if let Some(entity_id) = query.entity_id() {
            builder
                .push(" AND r.entity_id = ")
                .push_bind(entity_id.inner());
        }
        if let Some(reminder_type_id) = query.reminder_type_id() {
            builder
                .push(" AND r.reminder_type_id = ")
                .push_bind(reminder_type_id.inner());
        }
        builder.push(" ORDER BY r.reminder_id");

        let raws = builder
            .build_query_as::<ReminderRaw>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    "Unable to find reminders with query: {:?}. DB returned error: {:?}",
                    query, e
                );
                e
            })?;

        Ok(raws.into_iter().map(|r| r.into()).collect())
    }

    async fn find_active(&self, as_of: DateTime<Utc>) -> anyhow::Result<Vec<ActiveReminder>> {
        let raws = sqlx::query_as::<_, ActiveReminderRaw>(
            r#"
            SELECT r.*,
                rt.name AS rt_name,
                rt.description AS rt_description,
                rt.entity_type_id AS rt_entity_type_id,
                rt.is_active AS rt_is_active,
                rt.notification_type AS rt_notification_type,
                rt.ordering AS rt_ordering,
                rt.auth_rules AS rt_auth_rules,
                p.person_id,
                p.first_name,
                p.last_name,
                p.reminder_count,
                p.security_role_ids
            FROM reminders AS r
            INNER JOIN reminder_types AS rt ON rt.reminder_type_id = r.reminder_type_id
            INNER JOIN person_aliases AS pa ON pa.person_alias_id = r.person_alias_id
            INNER JOIN people AS p ON p.person_id = pa.person_id
            WHERE rt.is_active
            AND NOT r.is_complete
            AND r.reminder_date <= $1
            ORDER BY r.reminder_id
            "#,
        )
        .bind(as_of)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to find reminders active at: {:?}. DB returned error: {:?}",
                as_of, e
            );
            e
        })?;

        raws.into_iter().map(ActiveReminder::try_from).collect()
    }

    async fn find_entity_type_ids_by_person(&self, person_id: &ID) -> anyhow::Result<Vec<ID>> {
        let ids: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT rt.entity_type_id FROM reminders AS r
            INNER JOIN reminder_types AS rt ON rt.reminder_type_id = r.reminder_type_id
            INNER JOIN person_aliases AS pa ON pa.person_alias_id = r.person_alias_id
            WHERE pa.person_id = $1
            ORDER BY rt.entity_type_id
            "#,
        )
        .bind(person_id.inner())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to find entity types of person with id: {:?}. DB returned error: {:?}",
                person_id, e
            );
            e
        })?;

        Ok(ids.into_iter().map(|(id,)| id.into()).collect())
    }
}
