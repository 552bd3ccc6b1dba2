use super::IReminderTypeRepo;
use crate::repos::shared::inmemory_repo::*;
use reminders_domain::{ReminderType, ID};

pub struct InMemoryReminderTypeRepo {
    reminder_types: Collection<ReminderType>,
}

impl InMemoryReminderTypeRepo {
    pub fn new(reminder_types: Collection<ReminderType>) -> Self {
        Self { reminder_types }
    }
}

#[async_trait::async_trait]
impl IReminderTypeRepo for InMemoryReminderTypeRepo {
    async fn insert(&self, reminder_type: &ReminderType) -> anyhow::Result<()> {
        insert(reminder_type, &self.reminder_types);
        Ok(())
    }

    async fn save(&self, reminder_type: &ReminderType) -> anyhow::Result<()> {
        save(reminder_type, &self.reminder_types);
        Ok(())
    }

    async fn find(&self, reminder_type_id: &ID) -> anyhow::Result<Option<ReminderType>> {
        Ok(find(reminder_type_id, &self.reminder_types))
    }

    async fn find_many(&self, reminder_type_ids: &[ID]) -> anyhow::Result<Vec<ReminderType>> {
        Ok(find_by(&self.reminder_types, |t| {
            reminder_type_ids.contains(&t.id)
        }))
    }

    async fn find_active(&self, entity_type_id: Option<ID>) -> anyhow::Result<Vec<ReminderType>> {
        let mut reminder_types = find_by(&self.reminder_types, |t| {
            t.is_active && entity_type_id.map_or(true, |id| t.entity_type_id == id)
        });
        reminder_types.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        Ok(reminder_types)
    }
}
