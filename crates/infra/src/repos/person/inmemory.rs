use super::IPersonRepo;
use crate::repos::shared::inmemory_repo::*;
use reminders_domain::{Person, PersonAlias, ID};

pub struct InMemoryPersonRepo {
    people: Collection<Person>,
    aliases: Collection<PersonAlias>,
}

impl InMemoryPersonRepo {
    pub fn new(people: Collection<Person>, aliases: Collection<PersonAlias>) -> Self {
        Self { people, aliases }
    }
}

#[async_trait::async_trait]
impl IPersonRepo for InMemoryPersonRepo {
    async fn insert(&self, person: &Person) -> anyhow::Result<()> {
        insert(person, &self.people);
        Ok(())
    }

    async fn find(&self, person_id: &ID) -> anyhow::Result<Option<Person>> {
        Ok(find(person_id, &self.people))
    }

    async fn save_reminder_count(&self, person_id: &ID, reminder_count: i32) -> anyhow::Result<()> {
        update_many(
            &self.people,
            |p| p.id == *person_id,
            |p| p.reminder_count = Some(reminder_count),
        );
        Ok(())
    }

    async fn find_ids_with_reminder_count(&self) -> anyhow::Result<Vec<ID>> {
        Ok(find_by(&self.people, |p| p.cached_reminder_count() != 0)
            .into_iter()
            .map(|p| p.id)
            .collect())
    }

    async fn insert_alias(&self, alias: &PersonAlias) -> anyhow::Result<()> {
        insert(alias, &self.aliases);
        Ok(())
    }

    async fn find_alias(&self, alias_id: &ID) -> anyhow::Result<Option<PersonAlias>> {
        Ok(find(alias_id, &self.aliases))
    }
}
