//! The current-user context for user-scoped operations.
//!
//! A session is a plain value owned by whoever drives the catalogue, and it
//! only holds a user id. Operations that need the user resolve the id
//! against a catalogue at call time, so a session can outlive a swap of the
//! catalogue and simply stops resolving when the user is gone.

use crate::catalog::{Catalog, StoreResult, User};

/// At most one logged-in user at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<i32>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    /// Switch the session to the user with this id. An unknown id fails and
    /// leaves the previous login in place.
    pub fn login(&mut self, catalog: &Catalog, id: i32) -> StoreResult<()> {
        catalog.user_by_id(id)?;
        self.user_id = Some(id);
        Ok(())
    }

    /// Log out.
    pub fn clear(&mut self) {
        self.user_id = None;
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user_id
    }

    /// Resolve the logged-in user against `catalog`, if there is one and the
    /// id still exists there.
    pub fn user<'a>(&self, catalog: &'a Catalog) -> Option<&'a User> {
        self.user_id.and_then(|id| catalog.user_by_id(id).ok())
    }
}
