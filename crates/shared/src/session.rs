//! Injected session capability.
//!
//! Authentication is owned by an external session/token provider. The core
//! never reads ambient global state; callers inject an implementation of
//! [`SessionProvider`] and the client treats "not authenticated" as a
//! precondition failure before any request is dispatched.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// The authenticated user as seen by the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Role label (e.g. "admin", "clerk").
    pub role: String,
}

/// Capability interface for session state.
pub trait SessionProvider: Send + Sync {
    /// Returns true while the session is live.
    fn is_authenticated(&self) -> bool;

    /// Returns the current user, if authenticated.
    fn current_user(&self) -> Option<SessionUser>;

    /// Drops the session, forcing re-authentication.
    fn invalidate(&self);
}

/// Session backed by a token handed over at construction.
///
/// Used by the console binary; a real front end would wrap its own token store.
pub struct StaticSession {
    user: RwLock<Option<SessionUser>>,
}

impl StaticSession {
    /// Creates a live session for `user`.
    #[must_use]
    pub fn new(user: SessionUser) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Creates an unauthenticated session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            user: RwLock::new(None),
        }
    }
}

impl SessionProvider for StaticSession {
    fn is_authenticated(&self) -> bool {
        self.user.read().is_ok_and(|u| u.is_some())
    }

    fn current_user(&self) -> Option<SessionUser> {
        self.user.read().ok().and_then(|u| u.clone())
    }

    fn invalidate(&self) {
        if let Ok(mut user) = self.user.write() {
            *user = None;
        }
    }
}
