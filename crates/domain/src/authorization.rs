use crate::{Person, ID};
use serde::{Deserialize, Serialize};

/// `Action`s that can be secured on an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    View,
    Edit,
    Administrate,
}

/// Who an `AuthRule` applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "id")]
pub enum Principal {
    /// Everybody, including anonymous callers
    AllUsers,
    /// Any identified `Person`
    AuthenticatedUsers,
    /// A single `Person`
    Person(ID),
    /// Members of a security role
    Role(ID),
}

impl Principal {
    fn covers(&self, person: Option<&Person>) -> bool {
        match (self, person) {
            (Self::AllUsers, _) => true,
            (Self::AuthenticatedUsers, Some(_)) => true,
            (Self::Person(id), Some(p)) => p.id == *id,
            (Self::Role(role_id), Some(p)) => p.security_role_ids.contains(role_id),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthRule {
    pub action: Action,
    /// `true` allows the `Action`, `false` denies it
    pub allow: bool,
    pub principal: Principal,
}

impl AuthRule {
    pub fn allow(action: Action, principal: Principal) -> Self {
        Self {
            action,
            allow: true,
            principal,
        }
    }

    pub fn deny(action: Action, principal: Principal) -> Self {
        Self {
            action,
            allow: false,
            principal,
        }
    }
}

/// An item guarded by an ordered list of `AuthRule`s.
///
/// Rules are evaluated in order and the first rule with a matching `Action`
/// whose `Principal` covers the `Person` decides. When no rule matches only
/// `Action::View` is allowed.
pub trait Secured {
    fn auth_rules(&self) -> &[AuthRule];

    fn is_authorized(&self, action: Action, person: Option<&Person>) -> bool {
        self.auth_rules()
            .iter()
            .find(|rule| rule.action == action && rule.principal.covers(person))
            .map(|rule| rule.allow)
            .unwrap_or_else(|| Self::is_allowed_by_default(action))
    }

    fn is_allowed_by_default(action: Action) -> bool {
        action == Action::View
    }
}
