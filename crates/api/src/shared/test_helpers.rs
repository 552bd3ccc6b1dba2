use chrono::{DateTime, Duration, TimeZone, Utc};
use reminders_domain::{
    Action, AuthRule, EntityType, Person, PersonAlias, Principal, Reminder, ReminderType, ID,
};
use reminders_infra::{ReminderContext, StaticTimeSys};
use std::sync::Arc;

pub struct Seed {
    /// Owns reminders 1 to 5 through alias 10
    pub person: Person,
    /// Owns reminder 6 through alias 20
    pub other: Person,
    pub follow_up: ReminderType,
    pub inactive: ReminderType,
    /// Group reminder type only visible to role 30
    pub charter: ReminderType,
    /// Person reminder type hidden from `person`
    pub private_note: ReminderType,
    pub date: DateTime<Utc>,
}

pub const PERSON_ENTITY_TYPE: i64 = 15;
pub const GROUP_ENTITY_TYPE: i64 = 16;
pub const ROLE: i64 = 30;

/// `person` has 3 active reminders (one due later), 1 completed reminder and
/// 1 reminder under an inactive reminder type. The clock is frozen at `date`.
pub async fn setup_reminders(ctx: &ReminderContext) -> Seed {
    let date = Utc.with_ymd_and_hms(2022, 3, 1, 9, 0, 0).unwrap();
    let repos = &ctx.repos;

    repos
        .entity_types
        .insert(&EntityType::new(ID::new(PERSON_ENTITY_TYPE), "Core.Model.Person"))
        .await
        .unwrap();
    repos
        .entity_types
        .insert(&EntityType::new(ID::new(GROUP_ENTITY_TYPE), "Core.Model.Group"))
        .await
        .unwrap();

    let mut person = Person::new(ID::new(1), "Ted", "Decker");
    person.security_role_ids = vec![ID::new(ROLE)];
    let other = Person::new(ID::new(2), "Cindy", "Decker");
    repos.people.insert(&person).await.unwrap();
    repos.people.insert(&other).await.unwrap();
    repos
        .people
        .insert_alias(&PersonAlias::new(ID::new(10), person.id))
        .await
        .unwrap();
    repos
        .people
        .insert_alias(&PersonAlias::new(ID::new(20), other.id))
        .await
        .unwrap();

    let follow_up = ReminderType::new(ID::new(5), "Follow up", ID::new(PERSON_ENTITY_TYPE));
    let mut inactive = ReminderType::new(ID::new(6), "Birthday", ID::new(PERSON_ENTITY_TYPE));
    inactive.is_active = false;
    let mut charter = ReminderType::new(ID::new(7), "Renew charter", ID::new(GROUP_ENTITY_TYPE));
    charter.auth_rules = vec![
        AuthRule::allow(Action::View, Principal::Role(ID::new(ROLE))),
        AuthRule::deny(Action::View, Principal::AllUsers),
    ];
    let mut private_note =
        ReminderType::new(ID::new(8), "Private note", ID::new(PERSON_ENTITY_TYPE));
    private_note.auth_rules = vec![AuthRule::deny(Action::View, Principal::Person(person.id))];
    for reminder_type in &[&follow_up, &inactive, &charter, &private_note] {
        repos.reminder_types.insert(reminder_type).await.unwrap();
    }

    let mut completed = Reminder::new(ID::new(4), follow_up.id, ID::new(10), ID::new(503), date);
    completed.is_complete = true;
    let reminders = vec![
        Reminder::new(ID::new(1), follow_up.id, ID::new(10), ID::new(500), date),
        Reminder::new(ID::new(2), follow_up.id, ID::new(10), ID::new(501), date),
        Reminder::new(
            ID::new(3),
            follow_up.id,
            ID::new(10),
            ID::new(502),
            date + Duration::days(5),
        ),
        completed,
        Reminder::new(ID::new(5), inactive.id, ID::new(10), ID::new(504), date),
        Reminder::new(ID::new(6), follow_up.id, ID::new(20), ID::new(500), date),
    ];
    for reminder in &reminders {
        repos.reminders.insert(reminder).await.unwrap();
    }

    Seed {
        person,
        other,
        follow_up,
        inactive,
        charter,
        private_note,
        date,
    }
}

/// In-memory context with the clock frozen at `now`
pub fn context_at(now: DateTime<Utc>) -> ReminderContext {
    let mut ctx = ReminderContext::create_inmemory();
    ctx.sys = Arc::new(StaticTimeSys(now));
    ctx
}
