use crate::{Reminder, ReminderType, ID};

/// Optional filters a caller can narrow the `Reminder`s of a `Person` by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderFilter {
    pub entity_type_id: Option<ID>,
    /// Only considered together with `entity_type_id`
    pub entity_id: Option<ID>,
    pub reminder_type_id: Option<ID>,
}

/// The query shapes `Reminder`s of a `Person` can be looked up with.
///
/// Every shape is scoped to the `Person` owning the `Reminder` (through its
/// `PersonAlias`), and entity type filters apply to the entity type of the
/// `ReminderType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderQuery {
    ReminderTypeEntityAndPerson {
        reminder_type_id: ID,
        entity_type_id: ID,
        entity_id: ID,
        person_id: ID,
    },
    EntityAndPerson {
        entity_type_id: ID,
        entity_id: ID,
        person_id: ID,
    },
    ReminderTypeEntityTypeAndPerson {
        reminder_type_id: ID,
        entity_type_id: ID,
        person_id: ID,
    },
    EntityTypeAndPerson {
        entity_type_id: ID,
        person_id: ID,
    },
    ReminderTypeAndPerson {
        reminder_type_id: ID,
        person_id: ID,
    },
    Person {
        person_id: ID,
    },
}

impl ReminderQuery {
    /// Picks the most specific query shape for the given filters.
    ///
    /// Arms are evaluated top to bottom, an `entity_id` without an
    /// `entity_type_id` is ignored.
    pub fn select(person_id: ID, filter: ReminderFilter) -> Self {
        match (filter.entity_type_id, filter.entity_id, filter.reminder_type_id) {
            (Some(entity_type_id), Some(entity_id), Some(reminder_type_id)) => {
                Self::ReminderTypeEntityAndPerson {
                    reminder_type_id,
                    entity_type_id,
                    entity_id,
                    person_id,
                }
            }
            (Some(entity_type_id), Some(entity_id), None) => Self::EntityAndPerson {
                entity_type_id,
                entity_id,
                person_id,
            },
            (Some(entity_type_id), None, Some(reminder_type_id)) => {
                Self::ReminderTypeEntityTypeAndPerson {
                    reminder_type_id,
                    entity_type_id,
                    person_id,
                }
            }
            (Some(entity_type_id), None, None) => Self::EntityTypeAndPerson {
                entity_type_id,
                person_id,
            },
            (None, _, Some(reminder_type_id)) => Self::ReminderTypeAndPerson {
                reminder_type_id,
                person_id,
            },
            (None, _, None) => Self::Person { person_id },
        }
    }

    pub fn person_id(&self) -> ID {
        match *self {
            Self::ReminderTypeEntityAndPerson { person_id, .. }
            | Self::EntityAndPerson { person_id, .. }
            | Self::ReminderTypeEntityTypeAndPerson { person_id, .. }
            | Self::EntityTypeAndPerson { person_id, .. }
            | Self::ReminderTypeAndPerson { person_id, .. }
            | Self::Person { person_id } => person_id,
        }
    }

    pub fn entity_type_id(&self) -> Option<ID> {
        match *self {
            Self::ReminderTypeEntityAndPerson { entity_type_id, .. }
            | Self::EntityAndPerson { entity_type_id, .. }
            | Self::ReminderTypeEntityTypeAndPerson { entity_type_id, .. }
            | Self::EntityTypeAndPerson { entity_type_id, .. } => Some(entity_type_id),
            Self::ReminderTypeAndPerson { .. } | Self::Person { .. } => None,
        }
    }

    pub fn entity_id(&self) -> Option<ID> {
        match *self {
            Self::ReminderTypeEntityAndPerson { entity_id, .. }
            | Self::EntityAndPerson { entity_id, .. } => Some(entity_id),
            _ => None,
        }
    }

    pub fn reminder_type_id(&self) -> Option<ID> {
        match *self {
            Self::ReminderTypeEntityAndPerson {
                reminder_type_id, ..
            }
            | Self::ReminderTypeEntityTypeAndPerson {
                reminder_type_id, ..
            }
            | Self::ReminderTypeAndPerson {
                reminder_type_id, ..
            } => Some(reminder_type_id),
            _ => None,
        }
    }

    /// Checks a `Reminder` against this query. `owner_id` is the `Person`
    /// behind the `Reminder`'s alias.
    pub fn matches(&self, reminder: &Reminder, reminder_type: &ReminderType, owner_id: ID) -> bool {
        owner_id == self.person_id()
            && self
                .entity_type_id()
                .map_or(true, |id| reminder_type.entity_type_id == id)
            && self.entity_id().map_or(true, |id| reminder.entity_id == id)
            && self
                .reminder_type_id()
                .map_or(true, |id| reminder.reminder_type_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn filter(entity_type: Option<i64>, entity: Option<i64>, reminder_type: Option<i64>) -> ReminderFilter {
        ReminderFilter {
            entity_type_id: entity_type.map(ID::new),
            entity_id: entity.map(ID::new),
            reminder_type_id: reminder_type.map(ID::new),
        }
    }

    #[test]
    fn routes_every_filter_combination() {
        let p = ID::new(1);
        let et = ID::new(15);
        let e = ID::new(200);
        let rt = ID::new(5);

        let cases = vec![
            (
                filter(Some(15), Some(200), Some(5)),
                ReminderQuery::ReminderTypeEntityAndPerson {
                    reminder_type_id: rt,
                    entity_type_id: et,
                    entity_id: e,
                    person_id: p,
                },
            ),
            (
                filter(Some(15), Some(200), None),
                ReminderQuery::EntityAndPerson {
                    entity_type_id: et,
                    entity_id: e,
                    person_id: p,
                },
            ),
            (
                filter(Some(15), None, Some(5)),
                ReminderQuery::ReminderTypeEntityTypeAndPerson {
                    reminder_type_id: rt,
                    entity_type_id: et,
                    person_id: p,
                },
            ),
            (
                filter(Some(15), None, None),
                ReminderQuery::EntityTypeAndPerson {
                    entity_type_id: et,
                    person_id: p,
                },
            ),
            (
                filter(None, Some(200), Some(5)),
                ReminderQuery::ReminderTypeAndPerson {
                    reminder_type_id: rt,
                    person_id: p,
                },
            ),
            (
                filter(None, None, Some(5)),
                ReminderQuery::ReminderTypeAndPerson {
                    reminder_type_id: rt,
                    person_id: p,
                },
            ),
            (
                filter(None, Some(200), None),
                ReminderQuery::Person { person_id: p },
            ),
            (filter(None, None, None), ReminderQuery::Person { person_id: p }),
        ];

        for (filter, expected) in cases {
            assert_eq!(ReminderQuery::select(p, filter), expected, "{:?}", filter);
        }
    }

    #[test]
    fn reminder_type_only_does_not_fall_through() {
        let query = ReminderQuery::select(ID::new(1), filter(None, None, Some(5)));
        assert_eq!(
            query,
            ReminderQuery::ReminderTypeAndPerson {
                reminder_type_id: ID::new(5),
                person_id: ID::new(1)
            }
        );
        assert_eq!(query.entity_type_id(), None);
        assert_eq!(query.entity_id(), None);
        assert_eq!(query.reminder_type_id(), Some(ID::new(5)));
    }

    #[test]
    fn matches_reminders() {
        let date = Utc.with_ymd_and_hms(2022, 3, 1, 9, 0, 0).unwrap();
        let reminder_type = ReminderType::new(ID::new(5), "Follow up", ID::new(15));
        let reminder = Reminder::new(ID::new(9), ID::new(5), ID::new(100), ID::new(200), date);
        let owner = ID::new(1);

        let query = ReminderQuery::select(owner, filter(Some(15), Some(200), Some(5)));
        assert!(query.matches(&reminder, &reminder_type, owner));
        assert!(!query.matches(&reminder, &reminder_type, ID::new(2)));

        let query = ReminderQuery::select(owner, filter(Some(15), Some(201), None));
        assert!(!query.matches(&reminder, &reminder_type, owner));

        let query = ReminderQuery::select(owner, filter(Some(16), None, None));
        assert!(!query.matches(&reminder, &reminder_type, owner));

        let query = ReminderQuery::select(owner, filter(None, None, Some(6)));
        assert!(!query.matches(&reminder, &reminder_type, owner));

        let query = ReminderQuery::select(owner, ReminderFilter::default());
        assert!(query.matches(&reminder, &reminder_type, owner));
    }
}
