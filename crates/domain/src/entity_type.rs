use crate::shared::entity::{Entity, ID};

/// A kind of entity that `Reminder`s can be attached to
#[derive(Debug, Clone, PartialEq)]
pub struct EntityType {
    pub id: ID,
    /// Fully qualified name, e.g. "Core.Model.Group"
    pub name: String,
    pub friendly_name: Option<String>,
}

impl EntityType {
    pub fn new(id: ID, name: &str) -> Self {
        Self {
            id,
            name: name.into(),
            friendly_name: None,
        }
    }
}

impl Entity for EntityType {
    fn id(&self) -> ID {
        self.id
    }
}
