use super::IPersonRepo;
use reminders_domain::{Person, PersonAlias, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresPersonRepo {
    pool: PgPool,
}

impl PostgresPersonRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PersonRaw {
    pub person_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub reminder_count: Option<i32>,
    pub security_role_ids: Vec<i64>,
}

impl From<PersonRaw> for Person {
    fn from(raw: PersonRaw) -> Self {
        Self {
            id: raw.person_id.into(),
            first_name: raw.first_name,
            last_name: raw.last_name,
            reminder_count: raw.reminder_count,
            security_role_ids: raw.security_role_ids.into_iter().map(ID::from).collect(),
        }
    }
}

#[derive(Debug, FromRow)]
struct PersonAliasRaw {
    person_alias_id: i64,
    person_id: i64,
}

impl From<PersonAliasRaw> for PersonAlias {
    fn from(raw: PersonAliasRaw) -> Self {
        Self {
            id: raw.person_alias_id.into(),
            person_id: raw.person_id.into(),
        }
    }
}

#[async_trait::async_trait]
impl IPersonRepo for PostgresPersonRepo {
    async fn insert(&self, person: &Person) -> anyhow::Result<()> {
        let security_role_ids = person
            .security_role_ids
            .iter()
            .map(|id| id.inner())
            .collect::<Vec<_>>();
        sqlx::query(
            r#"
            INSERT INTO people(person_id, first_name, last_name, reminder_count, security_role_ids)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(person.id.inner())
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(person.reminder_count)
        .bind(&security_role_ids)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert person: {:?}. DB returned error: {:?}",
                person, e
            );
            e
        })?;

        Ok(())
    }

    async fn find(&self, person_id: &ID) -> anyhow::Result<Option<Person>> {
        let person = sqlx::query_as::<_, PersonRaw>(
            r#"
            SELECT * FROM people AS p
            WHERE p.person_id = $1
            "#,
        )
        .bind(person_id.inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to find person with id: {:?}. DB returned error: {:?}",
                person_id, e
            );
            e
        })?;

        Ok(person.map(|p| p.into()))
    }

    async fn save_reminder_count(&self, person_id: &ID, reminder_count: i32) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE people
            SET reminder_count = $2
            WHERE person_id = $1
            "#,
        )
        .bind(person_id.inner())
        .bind(reminder_count)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save reminder count: {:?} of person with id: {:?}. DB returned error: {:?}",
                reminder_count, person_id, e
            );
            e
        })?;

        Ok(())
    }

    async fn find_ids_with_reminder_count(&self) -> anyhow::Result<Vec<ID>> {
        let ids: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT p.person_id FROM people AS p
            WHERE p.reminder_count IS NOT NULL AND p.reminder_count <> 0
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to find people with a reminder count. DB returned error: {:?}",
                e
            );
            e
        })?;

        Ok(ids.into_iter().map(|(id,)| id.into()).collect())
    }

    async fn insert_alias(&self, alias: &PersonAlias) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO person_aliases(person_alias_id, person_id)
            VALUES($1, $2)
            "#,
        )
        .bind(alias.id.inner())
        .bind(alias.person_id.inner())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert person alias: {:?}. DB returned error: {:?}",
                alias, e
            );
            e
        })?;

        Ok(())
    }

    async fn find_alias(&self, alias_id: &ID) -> anyhow::Result<Option<PersonAlias>> {
        let alias = sqlx::query_as::<_, PersonAliasRaw>(
            r#"
            SELECT * FROM person_aliases AS pa
            WHERE pa.person_alias_id = $1
            "#,
        )
        .bind(alias_id.inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to find person alias with id: {:?}. DB returned error: {:?}",
                alias_id, e
            );
            e
        })?;

        Ok(alias.map(|a| a.into()))
    }
}
