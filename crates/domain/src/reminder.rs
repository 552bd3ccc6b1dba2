use crate::{
    shared::entity::{Entity, ID},
    Person, ReminderType,
};
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReminderDateError {
    #[error("The renew period must be a positive number of days, got: {0}")]
    NonPositiveRenewPeriod(i32),
    #[error("Moving the reminder date by {0} days is out of range")]
    OutOfRange(i64),
}

/// A `Reminder` asks a `Person` to revisit some entity, e.g. a group or
/// another person, at `reminder_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub reminder_type_id: ID,
    /// The alias of the `Person` owning this `Reminder`
    pub person_alias_id: ID,
    /// The entity this `Reminder` is about. Its `EntityType` is the one
    /// of the `ReminderType`
    pub entity_id: ID,
    pub note: Option<String>,
    /// When the `Reminder` becomes due
    pub reminder_date: DateTime<Utc>,
    pub is_complete: bool,
    /// Number of days between renewals, `None` for a one-off reminder
    pub renew_period_days: Option<i32>,
    /// Maximum number of renewals, `None` renews indefinitely
    pub renew_max_count: Option<i32>,
    pub renew_current_count: i32,
}

impl Reminder {
    pub fn new(
        id: ID,
        reminder_type_id: ID,
        person_alias_id: ID,
        entity_id: ID,
        reminder_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            reminder_type_id,
            person_alias_id,
            entity_id,
            note: None,
            reminder_date,
            is_complete: false,
            renew_period_days: None,
            renew_max_count: None,
            renew_current_count: 0,
        }
    }

    /// Active reminders count towards the cached `Person::reminder_count`
    pub fn is_active(&self, reminder_type: &ReminderType) -> bool {
        reminder_type.is_active && !self.is_complete
    }

    /// Active and with a `reminder_date` that is not after `as_of`
    pub fn is_due(&self, reminder_type: &ReminderType, as_of: DateTime<Utc>) -> bool {
        self.is_active(reminder_type) && self.reminder_date <= as_of
    }

    fn can_renew(&self) -> bool {
        match (self.renew_period_days, self.renew_max_count) {
            (Some(_), Some(max)) => self.renew_current_count < max,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// A renew period, when set, has to be at least one day
    pub fn validate_renew_period(&self) -> Result<(), InvalidReminderDateError> {
        match self.renew_period_days {
            Some(days) if days <= 0 => Err(InvalidReminderDateError::NonPositiveRenewPeriod(days)),
            _ => Ok(()),
        }
    }

    /// Completes the `Reminder`. A renewing `Reminder` is moved forward by
    /// its renew period instead and stays incomplete.
    ///
    /// Leaves the `Reminder` untouched when the renewed date is invalid.
    pub fn complete(&mut self) -> Result<(), InvalidReminderDateError> {
        self.validate_renew_period()?;
        match self.renew_period_days {
            Some(days) if self.can_renew() => {
                self.reminder_date = add_days(self.reminder_date, days as i64)?;
                self.renew_current_count += 1;
            }
            _ => self.is_complete = true,
        }
        Ok(())
    }

    /// Pushes the `Reminder` `days` days after `now`
    pub fn snooze(&mut self, now: DateTime<Utc>, days: u32) -> Result<(), InvalidReminderDateError> {
        self.reminder_date = add_days(now, days as i64)?;
        Ok(())
    }

    /// Stops any further renewals
    pub fn cancel_reoccurrence(&mut self) {
        self.renew_period_days = None;
        self.renew_max_count = None;
    }
}

fn add_days(date: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, InvalidReminderDateError> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(InvalidReminderDateError::OutOfRange(days))
}

impl Entity for Reminder {
    fn id(&self) -> ID {
        self.id
    }
}

/// A due `Reminder` together with its `ReminderType` and owning `Person`
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveReminder {
    pub reminder: Reminder,
    pub reminder_type: ReminderType,
    pub person: Person,
}
