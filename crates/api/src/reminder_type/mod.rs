pub mod get_reminder_entity_types;
pub mod get_reminder_types_for_person;
