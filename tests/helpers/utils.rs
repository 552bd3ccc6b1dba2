use reminders_domain::{Entity, ID};

pub fn sorted_ids<T: Entity>(entities: &[T]) -> Vec<i64> {
    let mut ids = entities
        .iter()
        .map(|e| e.id().inner())
        .collect::<Vec<_>>();
    ids.sort_unstable();
    ids
}

pub fn id(id: i64) -> ID {
    ID::new(id)
}
