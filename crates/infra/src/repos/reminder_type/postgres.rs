use super::IReminderTypeRepo;
use anyhow::anyhow;
use reminders_domain::{AuthRule, NotificationType, ReminderType, ID};
use sqlx::{types::Json, FromRow, PgPool, Postgres, QueryBuilder};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresReminderTypeRepo {
    pool: PgPool,
}

impl PostgresReminderTypeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderTypeRaw {
    reminder_type_id: i64,
    name: String,
    description: Option<String>,
    entity_type_id: i64,
    is_active: bool,
    notification_type: String,
    ordering: i32,
    auth_rules: serde_json::Value,
}

pub(crate) fn to_notification_type(raw: &str) -> anyhow::Result<NotificationType> {
    match raw {
        "Communication" => Ok(NotificationType::Communication),
        "Workflow" => Ok(NotificationType::Workflow),
        other => Err(anyhow!("Unknown notification type: {}", other)),
    }
}

fn from_notification_type(notification_type: NotificationType) -> &'static str {
    match notification_type {
        NotificationType::Communication => "Communication",
        NotificationType::Workflow => "Workflow",
    }
}

// Malformed rule data is surfaced as an error instead of being skipped
pub(crate) fn to_auth_rules(raw: serde_json::Value) -> anyhow::Result<Vec<AuthRule>> {
    serde_json::from_value(raw).map_err(|e| anyhow!("Malformed authorization rules: {}", e))
}

impl TryFrom<ReminderTypeRaw> for ReminderType {
    type Error = anyhow::Error;

    fn try_from(raw: ReminderTypeRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.reminder_type_id.into(),
            name: raw.name,
            description: raw.description,
            entity_type_id: raw.entity_type_id.into(),
            is_active: raw.is_active,
            notification_type: to_notification_type(&raw.notification_type)?,
            order: raw.ordering,
            auth_rules: to_auth_rules(raw.auth_rules)?,
        })
    }
}

fn into_reminder_types(raws: Vec<ReminderTypeRaw>) -> anyhow::Result<Vec<ReminderType>> {
    raws.into_iter().map(ReminderType::try_from).collect()
}

#[async_trait::async_trait]
impl IReminderTypeRepo for PostgresReminderTypeRepo {
    async fn insert(&self, reminder_type: &ReminderType) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminder_types
            (reminder_type_id, name, description, entity_type_id, is_active, notification_type, ordering, auth_rules)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(reminder_type.id.inner())
        .bind(&reminder_type.name)
        .bind(&reminder_type.description)
        .bind(reminder_type.entity_type_id.inner())
        .bind(reminder_type.is_active)
        .bind(from_notification_type(reminder_type.notification_type))
        .bind(reminder_type.order)
        .bind(Json(&reminder_type.auth_rules))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder type: {:?}. DB returned error: {:?}",
                reminder_type, e
            );
            e
        })?;

        Ok(())
    }

    async fn save(&self, reminder_type: &ReminderType) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminder_types
            SET name = $2,
            description = $3,
            entity_type_id = $4,
            is_active = $5,
            notification_type = $6,
            ordering = $7,
            auth_rules = $8
            WHERE reminder_type_id = $1
            "#,
        )
        .bind(reminder_type.id.inner())
        .bind(&reminder_type.name)
        .bind(&reminder_type.description)
        .bind(reminder_type.entity_type_id.inner())
        .bind(reminder_type.is_active)
        .bind(from_notification_type(reminder_type.notification_type))
        .bind(reminder_type.order)
        .bind(Json(&reminder_type.auth_rules))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save reminder type: {:?}. DB returned error: {:?}",
                reminder_type, e
            );
            e
        })?;

        Ok(())
    }

    async fn find(&self, reminder_type_id: &ID) -> anyhow::Result<Option<ReminderType>> {
        let raw = sqlx::query_as::<_, ReminderTypeRaw>(
            r#"
            SELECT * FROM reminder_types AS rt
            WHERE rt.reminder_type_id = $1
            "#,
        )
        .bind(reminder_type_id.inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to find reminder type with id: {:?}. DB returned error: {:?}",
                reminder_type_id, e
            );
            e
        })?;

        raw.map(ReminderType::try_from).transpose()
    }

    async fn find_many(&self, reminder_type_ids: &[ID]) -> anyhow::Result<Vec<ReminderType>> {
        let ids = reminder_type_ids
            .iter()
            .map(|id| id.inner())
            .collect::<Vec<_>>();
        let raws = sqlx::query_as::<_, ReminderTypeRaw>(
            r#"
            SELECT * FROM reminder_types AS rt
            WHERE rt.reminder_type_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to find reminder types with ids: {:?}. DB returned error: {:?}",
                reminder_type_ids, e
            );
            e
        })?;

        into_reminder_types(raws)
    }

    async fn find_active(&self, entity_type_id: Option<ID>) -> anyhow::Result<Vec<ReminderType>> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT * FROM reminder_types AS rt WHERE rt.is_active",
        );
        if let Some(entity_type_id) = entity_type_id {
            query
                .push(" AND rt.entity_type_id = ")
                .push_bind(entity_type_id.inner());
        }
        query.push(" ORDER BY rt.ordering, rt.name");

        let raws = query
            .build_query_as::<ReminderTypeRaw>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    "Unable to find active reminder types of entity type: {:?}. DB returned error: {:?}",
                    entity_type_id, e
                );
                e
            })?;

        into_reminder_types(raws)
    }
}
