use crate::{
    reminder_count::ReminderCountSync,
    shared::entity::{Entity, ID},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    /// Cached number of active `Reminder`s owned by this `Person`.
    /// Only refreshed by `sync_reminder_count` and may be stale in between.
    pub reminder_count: Option<i32>,
    /// Security roles this `Person` is a member of
    pub security_role_ids: Vec<ID>,
}

impl Person {
    pub fn new(id: ID, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            reminder_count: None,
            security_role_ids: Vec::new(),
        }
    }

    /// Cached count, a missing value counts as zero
    pub fn cached_reminder_count(&self) -> i32 {
        self.reminder_count.unwrap_or(0)
    }

    /// Stores a freshly computed count and reports whether it has to be persisted
    pub fn sync_reminder_count(&mut self, fresh: i32) -> ReminderCountSync {
        let previous = self.cached_reminder_count();
        if previous == fresh {
            return ReminderCountSync::Unchanged(fresh);
        }
        self.reminder_count = Some(fresh);
        ReminderCountSync::Updated {
            previous,
            current: fresh,
        }
    }
}

impl Entity for Person {
    fn id(&self) -> ID {
        self.id
    }
}

/// An identity of a `Person`. `Reminder`s point at aliases, never
/// directly at the `Person`.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonAlias {
    pub id: ID,
    pub person_id: ID,
}

impl PersonAlias {
    pub fn new(id: ID, person_id: ID) -> Self {
        Self { id, person_id }
    }
}

impl Entity for PersonAlias {
    fn id(&self) -> ID {
        self.id
    }
}
