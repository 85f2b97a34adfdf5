//! Authorization predicates and the bearer-token contract
//!
//! Identity issuance lives with the external auth collaborator; by the time a
//! request reaches this crate it carries a verified `(user id, role)` pair.
//! The two predicates below are the only authorization rules in the system
//! and every mutating entry point goes through them rather than re-deriving
//! the check inline.

pub mod jwt;

use uuid::Uuid;

use crate::models::{Ad, UserRole};

pub use jwt::{sign_token, verify_token, Claims, JwtError};

/// Verified principal attached to an authenticated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub role: UserRole,
}

impl Principal {
    pub fn new(id: Uuid, role: UserRole) -> Self {
        Self { id, role }
    }
}

/// Ownership-or-admin predicate gating every mutation of an ad.
pub fn can_mutate_ad(requester: &Principal, ad: &Ad) -> bool {
    requester.id == ad.author_id || is_admin(requester)
}

/// Unconditional role predicate gating admin-only surfaces, independent of
/// any resource ownership.
pub fn is_admin(requester: &Principal) -> bool {
    matches!(requester.role, UserRole::Admin)
}
