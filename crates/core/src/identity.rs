//! Seam for the external identity provider.
//!
//! Sign-in, sign-up and sign-out happen entirely on the provider's side.
//! Homestead only asks whether someone is signed in and who they are.

use serde::{Deserialize, Serialize};

/// A user signed in through the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Provider-assigned user identifier.
    pub id: String,
}

/// Source of the current user.
pub trait IdentityProvider {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<AuthenticatedUser>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Provider for sessions with nobody signed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentityProvider for Anonymous {
    fn current_user(&self) -> Option<AuthenticatedUser> {
        None
    }
}
