//! Active owner session backed by `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no authentication. The welcome page records which owner the
//! visitor picked (or created) under `ownerId`/`ownerName`; every portal page
//! scopes its data to that id. Logout removes both keys. The root component
//! mirrors the stored values into a context signal at startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Owner;
use crate::util::storage;

pub const OWNER_ID_KEY: &str = "ownerId";
pub const OWNER_NAME_KEY: &str = "ownerName";

/// Greeting fallback when no name was stored.
pub const GUEST_NAME: &str = "Guest";

/// The owner the current browser session is acting as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveOwner {
    pub id: String,
    pub name: String,
}

impl ActiveOwner {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { GUEST_NAME } else { &self.name }
    }
}

impl From<&Owner> for ActiveOwner {
    fn from(owner: &Owner) -> Self {
        Self { id: owner.id.clone(), name: owner.name.clone() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub owner: Option<ActiveOwner>,
}

impl SessionState {
    /// Build from raw stored values. A missing or blank id means no session.
    pub fn from_stored(id: Option<String>, name: Option<String>) -> Self {
        let owner = id
            .filter(|id| !id.trim().is_empty())
            .map(|id| ActiveOwner { id, name: name.unwrap_or_default() });
        Self { owner }
    }

    /// Read the session from `localStorage`.
    pub fn load() -> Self {
        Self::from_stored(storage::load_string(OWNER_ID_KEY), storage::load_string(OWNER_NAME_KEY))
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.id.as_str())
    }

    pub fn display_name(&self) -> &str {
        self.owner.as_ref().map_or(GUEST_NAME, ActiveOwner::display_name)
    }

    /// Record `owner` as active, in memory and in storage.
    pub fn activate(&mut self, owner: ActiveOwner) {
        storage::save_string(OWNER_ID_KEY, &owner.id);
        storage::save_string(OWNER_NAME_KEY, &owner.name);
        self.owner = Some(owner);
    }

    /// Forget the active owner, in memory and in storage.
    pub fn clear(&mut self) {
        storage::remove(OWNER_ID_KEY);
        storage::remove(OWNER_NAME_KEY);
        self.owner = None;
    }
}
