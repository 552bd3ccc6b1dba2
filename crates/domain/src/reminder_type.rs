use crate::{
    authorization::{AuthRule, Secured},
    shared::entity::{Entity, ID},
};
use serde::{Deserialize, Serialize};

/// How the owner of a `Reminder` gets notified once it is due
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationType {
    Communication,
    Workflow,
}

impl Default for NotificationType {
    fn default() -> Self {
        Self::Communication
    }
}

/// A `ReminderType` categorizes `Reminder`s for one kind of entity, e.g.
/// "Follow up" reminders on people or "Renew charter" reminders on groups.
/// It is configured by administrators and guarded by `AuthRule`s.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderType {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    /// The `EntityType` that `Reminder`s of this type are attached to
    pub entity_type_id: ID,
    pub is_active: bool,
    pub notification_type: NotificationType,
    pub order: i32,
    pub auth_rules: Vec<AuthRule>,
}

impl ReminderType {
    pub fn new(id: ID, name: &str, entity_type_id: ID) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            entity_type_id,
            is_active: true,
            notification_type: Default::default(),
            order: 0,
            auth_rules: Vec::new(),
        }
    }
}

impl Entity for ReminderType {
    fn id(&self) -> ID {
        self.id
    }
}

impl Secured for ReminderType {
    fn auth_rules(&self) -> &[AuthRule] {
        &self.auth_rules
    }
}
