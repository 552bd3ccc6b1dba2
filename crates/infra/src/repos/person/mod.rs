mod inmemory;
mod postgres;

pub use inmemory::InMemoryPersonRepo;
pub(crate) use postgres::PersonRaw;
pub use postgres::PostgresPersonRepo;
use reminders_domain::{Person, PersonAlias, ID};

#[async_trait::async_trait]
pub trait IPersonRepo: Send + Sync {
    async fn insert(&self, person: &Person) -> anyhow::Result<()>;
    async fn find(&self, person_id: &ID) -> anyhow::Result<Option<Person>>;
    /// Persists the cached reminder count of a `Person`
    async fn save_reminder_count(&self, person_id: &ID, reminder_count: i32) -> anyhow::Result<()>;
    /// `Person`s whose cached reminder count is set and not zero
    async fn find_ids_with_reminder_count(&self) -> anyhow::Result<Vec<ID>>;
    async fn insert_alias(&self, alias: &PersonAlias) -> anyhow::Result<()>;
    async fn find_alias(&self, alias_id: &ID) -> anyhow::Result<Option<PersonAlias>>;
}

#[cfg(test)]
mod tests {
    use crate::Repos;
    use reminders_domain::{Person, PersonAlias, ID};

    #[tokio::test]
    async fn test_reminder_count_is_saved() {
        let repos = Repos::create_inmemory();

        let ted = Person::new(ID::new(1), "Ted", "Decker");
        let cindy = Person::new(ID::new(2), "Cindy", "Decker");
        repos.people.insert(&ted).await.expect("To insert person");
        repos.people.insert(&cindy).await.expect("To insert person");
        assert!(repos
            .people
            .find_ids_with_reminder_count()
            .await
            .unwrap()
            .is_empty());

        repos
            .people
            .save_reminder_count(&ted.id, 4)
            .await
            .expect("To save reminder count");
        repos
            .people
            .save_reminder_count(&cindy.id, 0)
            .await
            .expect("To save reminder count");

        let found = repos.people.find(&ted.id).await.unwrap().unwrap();
        assert_eq!(found.reminder_count, Some(4));
        assert_eq!(
            repos.people.find_ids_with_reminder_count().await.unwrap(),
            vec![ted.id]
        );

        assert!(repos.people.find(&ID::new(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_aliases() {
        let repos = Repos::create_inmemory();
        let ted = Person::new(ID::new(1), "Ted", "Decker");
        repos.people.insert(&ted).await.unwrap();

        let alias = PersonAlias::new(ID::new(100), ted.id);
        repos.people.insert_alias(&alias).await.unwrap();
        assert_eq!(
            repos.people.find_alias(&alias.id).await.unwrap(),
            Some(alias)
        );
        assert!(repos.people.find_alias(&ID::new(101)).await.unwrap().is_none());
    }
}
