use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use reminders_domain::{
    ActiveReminder, Person, PersonAlias, Reminder, ReminderQuery, ReminderType, ID,
};
use std::collections::BTreeSet;

pub struct InMemoryReminderRepo {
    reminders: Collection<Reminder>,
    reminder_types: Collection<ReminderType>,
    aliases: Collection<PersonAlias>,
    people: Collection<Person>,
}

impl InMemoryReminderRepo {
    pub fn new(
        reminder_types: Collection<ReminderType>,
        aliases: Collection<PersonAlias>,
        people: Collection<Person>,
    ) -> Self {
        Self {
            reminders: collection(),
            reminder_types,
            aliases,
            people,
        }
    }

    /// Joins every `Reminder` with its `ReminderType` and the id of its owner,
    /// ordered by `Reminder` id. `Reminder`s with dangling references are
    /// skipped like an inner join would.
    fn joined(&self) -> Vec<(Reminder, ReminderType, ID)> {
        let reminders = self.reminders.lock().unwrap();
        let reminder_types = self.reminder_types.lock().unwrap();
        let aliases = self.aliases.lock().unwrap();

        let mut joined = reminders
            .iter()
            .filter_map(|reminder| {
                let reminder_type = reminder_types
                    .iter()
                    .find(|t| t.id == reminder.reminder_type_id)?;
                let alias = aliases.iter().find(|a| a.id == reminder.person_alias_id)?;
                Some((reminder.clone(), reminder_type.clone(), alias.person_id))
            })
            .collect::<Vec<_>>();
        joined.sort_by_key(|(reminder, _, _)| reminder.id);
        joined
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(find(reminder_id, &self.reminders))
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(delete(reminder_id, &self.reminders))
    }

    async fn find_by_query(&self, query: &ReminderQuery) -> anyhow::Result<Vec<Reminder>> {
        Ok(self
            .joined()
            .into_iter()
            .filter(|(reminder, reminder_type, owner_id)| {
                query.matches(reminder, reminder_type, *owner_id)
            })
            .map(|(reminder, _, _)| reminder)
            .collect())
    }

    async fn find_active(&self, as_of: DateTime<Utc>) -> anyhow::Result<Vec<ActiveReminder>> {
        let joined = self.joined();
        let people = self.people.lock().unwrap();

        Ok(joined
            .into_iter()
            .filter(|(reminder, reminder_type, _)| reminder.is_due(reminder_type, as_of))
            .filter_map(|(reminder, reminder_type, owner_id)| {
                let person = people.iter().find(|p| p.id == owner_id)?.clone();
                Some(ActiveReminder {
                    reminder,
                    reminder_type,
                    person,
                })
            })
            .collect())
    }

    async fn find_entity_type_ids_by_person(&self, person_id: &ID) -> anyhow::Result<Vec<ID>> {
        let entity_type_ids: BTreeSet<ID> = self
            .joined()
            .into_iter()
            .filter(|(_, _, owner_id)| owner_id == person_id)
            .map(|(_, reminder_type, _)| reminder_type.entity_type_id)
            .collect();

        Ok(entity_type_ids.into_iter().collect())
    }
}
