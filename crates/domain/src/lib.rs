mod authorization;
mod entity_type;
mod person;
mod reminder;
mod reminder_count;
mod reminder_query;
mod reminder_type;
mod shared;

pub use authorization::{Action, AuthRule, Principal, Secured};
pub use entity_type::EntityType;
pub use person::{Person, PersonAlias};
pub use reminder::{ActiveReminder, InvalidReminderDateError, Reminder};
pub use reminder_count::{count_active_reminders, ReminderCountSync};
pub use reminder_query::{ReminderFilter, ReminderQuery};
pub use reminder_type::{NotificationType, ReminderType};
pub use shared::entity::{Entity, InvalidIDError, ID};
