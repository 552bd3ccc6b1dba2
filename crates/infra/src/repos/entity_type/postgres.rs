use super::IEntityTypeRepo;
use reminders_domain::{EntityType, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresEntityTypeRepo {
    pool: PgPool,
}

impl PostgresEntityTypeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EntityTypeRaw {
    entity_type_id: i64,
    name: String,
    friendly_name: Option<String>,
}

impl From<EntityTypeRaw> for EntityType {
    fn from(raw: EntityTypeRaw) -> Self {
        Self {
            id: raw.entity_type_id.into(),
            name: raw.name,
            friendly_name: raw.friendly_name,
        }
    }
}

#[async_trait::async_trait]
impl IEntityTypeRepo for PostgresEntityTypeRepo {
    async fn insert(&self, entity_type: &EntityType) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO entity_types(entity_type_id, name, friendly_name)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(entity_type.id.inner())
        .bind(&entity_type.name)
        .bind(&entity_type.friendly_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert entity type: {:?}. DB returned error: {:?}",
                entity_type, e
            );
            e
        })?;

        Ok(())
    }

    async fn find_many(&self, entity_type_ids: &[ID]) -> anyhow::Result<Vec<EntityType>> {
        let ids = entity_type_ids
            .iter()
            .map(|id| id.inner())
            .collect::<Vec<_>>();
        let raws = sqlx::query_as::<_, EntityTypeRaw>(
            r#"
            SELECT * FROM entity_types AS et
            WHERE et.entity_type_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to find entity types with ids: {:?}. DB returned error: {:?}",
                entity_type_ids, e
            );
            e
        })?;

        Ok(raws.into_iter().map(|et| et.into()).collect())
    }
}
