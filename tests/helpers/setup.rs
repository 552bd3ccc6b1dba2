use chrono::{DateTime, TimeZone, Utc};
use reminders_domain::{
    Action, AuthRule, EntityType, Person, PersonAlias, Principal, ReminderType, ID,
};
use reminders_infra::{ReminderContext, StaticTimeSys};
use std::sync::Arc;

pub struct TestApp {
    pub ctx: ReminderContext,
    pub now: DateTime<Utc>,
    pub staff: Person,
    pub member: Person,
    pub phone_call: ReminderType,
    pub visit: ReminderType,
    pub staff_only: ReminderType,
}

pub const PERSON_ENTITY_TYPE: i64 = 1;
pub const GROUP_ENTITY_TYPE: i64 = 2;
pub const STAFF_ROLE: i64 = 100;
pub const STAFF_ALIAS: i64 = 1000;
pub const MEMBER_ALIAS: i64 = 2000;

// In-memory application with the clock frozen, people and reminder types
// in place but no reminders yet
pub async fn spawn_app() -> TestApp {
    let now = Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap();
    let mut ctx = ReminderContext::create_inmemory();
    ctx.sys = Arc::new(StaticTimeSys(now));
    let repos = &ctx.repos;

    repos
        .entity_types
        .insert(&EntityType::new(ID::new(PERSON_ENTITY_TYPE), "Core.Model.Person"))
        .await
        .expect("To insert entity type");
    repos
        .entity_types
        .insert(&EntityType::new(ID::new(GROUP_ENTITY_TYPE), "Core.Model.Group"))
        .await
        .expect("To insert entity type");

    let mut staff = Person::new(ID::new(1), "Alisha", "Marble");
    staff.security_role_ids = vec![ID::new(STAFF_ROLE)];
    let member = Person::new(ID::new(2), "Noah", "Hooks");
    for (person, alias) in &[(&staff, STAFF_ALIAS), (&member, MEMBER_ALIAS)] {
        repos.people.insert(person).await.expect("To insert person");
        repos
            .people
            .insert_alias(&PersonAlias::new(ID::new(*alias), person.id))
            .await
            .expect("To insert alias");
    }

    let mut phone_call = ReminderType::new(ID::new(10), "Phone call", ID::new(PERSON_ENTITY_TYPE));
    phone_call.order = 1;
    let mut visit = ReminderType::new(ID::new(11), "Visit", ID::new(GROUP_ENTITY_TYPE));
    visit.order = 2;
    let mut staff_only =
        ReminderType::new(ID::new(12), "Background check", ID::new(PERSON_ENTITY_TYPE));
    staff_only.order = 3;
    staff_only.auth_rules = vec![
        AuthRule::allow(Action::View, Principal::Role(ID::new(STAFF_ROLE))),
        AuthRule::deny(Action::View, Principal::AllUsers),
    ];
    for reminder_type in &[&phone_call, &visit, &staff_only] {
        repos
            .reminder_types
            .insert(reminder_type)
            .await
            .expect("To insert reminder type");
    }

    TestApp {
        ctx,
        now,
        staff,
        member,
        phone_call,
        visit,
        staff_only,
    }
}
