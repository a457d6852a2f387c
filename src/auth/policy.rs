//! Pure allow/deny logic for every resource in the API.
//!
//! Two entry points, and the difference matters: [`Policy::authorize`] is a
//! gate for point access against one resolved instance, while
//! [`Policy::scope`] is a filter applied to list queries before pagination.
//! Listing with the gate would either over-expose or reject the whole call
//! on the first foreign row; listing with the filter silently omits rows
//! the caller does not own.

use crate::config::{config, QuizWritePolicy};
use crate::types::error::AppError;
use uuid::Uuid;

/// The caller, as resolved by `auth::identity::authenticate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    /// The static admin key from config; superuser-equivalent, no user row.
    Root,
    User { id: Uuid, is_superuser: bool },
}

impl Actor {
    pub fn id(&self) -> Option<Uuid> {
        match self {
            Actor::User { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn is_superuser(&self) -> bool {
        matches!(self, Actor::Root | Actor::User { is_superuser: true, .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

/// What the action targets. Point resources carry the one fact the rules
/// need (the owner); contents deliberately carry their *section's* owner,
/// never an owner of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User { id: Uuid },
    UserCollection,
    Section { owner: Uuid },
    SectionCollection,
    Content { section_owner: Uuid },
    ContentCollection,
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Bridge into the error taxonomy for handlers.
    pub fn require(self) -> Result<(), AppError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(DenyReason::Unauthenticated) => Err(AppError::Unauthorized),
            Decision::Deny(DenyReason::Forbidden) => Err(AppError::Forbidden),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    User,
    Section,
    Content,
    Quiz,
}

/// Filter handed to repositories for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    All,
    OwnedBy(Uuid),
    SelfOnly(Uuid),
    Nothing,
}

#[derive(Debug, Clone, Copy)]
pub struct Policy {
    pub quiz_writes: QuizWritePolicy,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            quiz_writes: QuizWritePolicy::Any,
        }
    }
}

impl Policy {
    pub fn current() -> Self {
        Policy {
            quiz_writes: config().quiz_write_policy,
        }
    }

    /// Total function: never errors, deny is a normal outcome.
    /// Precedence chain, first match wins.
    pub fn authorize(&self, actor: Actor, resource: Resource, action: Action) -> Decision {
        // 1. every action here requires authentication
        if matches!(actor, Actor::Anonymous) {
            return Decision::Deny(DenyReason::Unauthenticated);
        }

        // 2. superusers bypass all further ownership checks
        if actor.is_superuser() {
            return Decision::Allow;
        }

        let uid = match actor.id() {
            Some(id) => id,
            None => return Decision::Deny(DenyReason::Forbidden),
        };

        match (resource, action) {
            // 3. identities: self-access only; create and list stay superuser-only
            (Resource::User { id }, Action::Read | Action::Update | Action::Delete)
                if id == uid =>
            {
                Decision::Allow
            }
            (Resource::User { .. }, _) | (Resource::UserCollection, _) => {
                Decision::Deny(DenyReason::Forbidden)
            }

            // 4. sections: anyone may create (creator becomes owner); point
            //    access is owner-only; list is scoped via `scope`, not gated
            (Resource::SectionCollection, Action::Create | Action::List) => Decision::Allow,
            (Resource::SectionCollection, _) => Decision::Deny(DenyReason::Forbidden),
            (Resource::Section { owner }, Action::Read | Action::Update | Action::Delete)
                if owner == uid =>
            {
                Decision::Allow
            }
            (Resource::Section { .. }, _) => Decision::Deny(DenyReason::Forbidden),

            // 5. contents: authorization is transitive through the parent
            //    section's owner, for create as well as point access
            (Resource::Content { section_owner }, _) if section_owner == uid => Decision::Allow,
            (Resource::Content { .. }, _) => Decision::Deny(DenyReason::Forbidden),
            (Resource::ContentCollection, Action::List) => Decision::Allow,
            (Resource::ContentCollection, _) => Decision::Deny(DenyReason::Forbidden),

            // 6. quiz: reads open to any authenticated caller, writes per config
            (Resource::Quiz, Action::Read | Action::List) => Decision::Allow,
            (Resource::Quiz, _) => match self.quiz_writes {
                QuizWritePolicy::Any => Decision::Allow,
                QuizWritePolicy::Superuser => Decision::Deny(DenyReason::Forbidden),
            },
        }
    }

    /// Filter-mode entry point for list queries. Repositories translate the
    /// returned scope into a query filter, so foreign rows are omitted
    /// instead of rejected.
    pub fn scope(&self, actor: Actor, kind: ResourceKind) -> ListScope {
        if actor.is_superuser() {
            return ListScope::All;
        }
        match actor {
            Actor::Anonymous => ListScope::Nothing,
            Actor::Root => ListScope::All,
            Actor::User { id, .. } => match kind {
                ResourceKind::User => ListScope::SelfOnly(id),
                ResourceKind::Section | ResourceKind::Content => ListScope::OwnedBy(id),
                ResourceKind::Quiz => ListScope::All,
            },
        }
    }
}
