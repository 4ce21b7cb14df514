//! Read-side repository the matching routes depend on.
//!
//! The engine itself accepts plain slices and never reaches into storage;
//! this trait is where a real deployment would plug in its database-backed
//! data access. The bundled [`InMemoryDirectory`] serves the demo data set.

use std::sync::Arc;

use volmatch::{demo, Event, User};

/// Supplies the user and candidate-event collections for a matching request.
///
/// Implementations return owned snapshots so a request ranks against a
/// consistent view even if the backing store changes mid-flight.
pub trait EventDirectory: Send + Sync {
    fn users(&self) -> Vec<User>;
    fn events(&self) -> Vec<Event>;
}

/// In-memory directory over fixed collections.
pub struct InMemoryDirectory {
    users: Vec<User>,
    events: Vec<Event>,
}

impl InMemoryDirectory {
    pub fn new(users: Vec<User>, events: Vec<Event>) -> Self {
        Self { users, events }
    }

    /// Directory seeded with the demo volunteers and events.
    pub fn with_demo_data() -> Self {
        Self::new(demo::demo_users(), demo::demo_events())
    }

    pub fn into_shared(self) -> Arc<dyn EventDirectory> {
        Arc::new(self)
    }
}

impl EventDirectory for InMemoryDirectory {
    fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn events(&self) -> Vec<Event> {
        self.events.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_directory_is_populated() {
        let directory = InMemoryDirectory::with_demo_data();
        assert!(!directory.users().is_empty());
        assert!(!directory.events().is_empty());
    }

    #[test]
    fn snapshots_are_independent() {
        let directory = InMemoryDirectory::with_demo_data();
        let mut first = directory.events();
        first.clear();
        assert!(!directory.events().is_empty());
    }
}
