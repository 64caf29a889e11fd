//! Store - The four named entity collections plus relationship resolution.

use std::sync::{Arc, RwLock};

use crate::collection::Collection;
use crate::entities::{Event, Location, Participant, User};
use crate::error::StoreError;
use crate::facade::RecordSet;
use crate::id::{IdGenerator, UuidGenerator};
use crate::record::Record;

/// Seam giving the generic façade access to the store's collection for a
/// given record type. Implemented once per entity the store owns.
pub trait HasCollection<T: Record> {
    fn collection(&self) -> &RwLock<Collection<T>>;
}

/// In-memory store owning exactly four collections: users, locations,
/// events, participants.
///
/// Collections live behind `Arc<RwLock<..>>` so every mutation is serialized
/// and each CRUD call is atomic with respect to other calls. Clone-friendly
/// via Arc: clones share storage.
#[derive(Clone)]
pub struct Store {
    users: Arc<RwLock<Collection<User>>>,
    locations: Arc<RwLock<Collection<Location>>>,
    events: Arc<RwLock<Collection<Event>>>,
    participants: Arc<RwLock<Collection<Participant>>>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with random uuid ids.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    /// Create an empty store with an injected id generator, so tests can
    /// supply deterministic ids.
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            users: Arc::new(RwLock::new(Collection::new())),
            locations: Arc::new(RwLock::new(Collection::new())),
            events: Arc::new(RwLock::new(Collection::new())),
            participants: Arc::new(RwLock::new(Collection::new())),
            ids,
        }
    }

    /// Typed CRUD façade for any record type this store holds.
    pub fn records<T: Record>(&self) -> RecordSet<'_, T>
    where
        Self: HasCollection<T>,
    {
        RecordSet::new(self.collection(), self.ids.as_ref())
    }

    pub fn users(&self) -> RecordSet<'_, User> {
        self.records()
    }

    pub fn locations(&self) -> RecordSet<'_, Location> {
        self.records()
    }

    pub fn events(&self) -> RecordSet<'_, Event> {
        self.records()
    }

    pub fn participants(&self) -> RecordSet<'_, Participant> {
        self.records()
    }

    /// Users whose id equals the event's `user_id`. Logically 0-or-1 but
    /// kept as a list, matching the shape the schema layer exposes.
    pub fn related_user(&self, event: &Event) -> Result<Vec<User>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(users.filter(|user| user.id == event.user_id))
    }

    /// Locations whose id equals the event's `location_id`.
    pub fn related_location(&self, event: &Event) -> Result<Vec<Location>, StoreError> {
        let locations = self
            .locations
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(locations.filter(|location| location.id == event.location_id))
    }

    /// Participants registered for the event, joined on `event_id`.
    pub fn related_participants(&self, event: &Event) -> Result<Vec<Participant>, StoreError> {
        let participants = self
            .participants
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(participants.filter(|participant| participant.event_id == event.id))
    }
}

impl HasCollection<User> for Store {
    fn collection(&self) -> &RwLock<Collection<User>> {
        &self.users
    }
}

impl HasCollection<Location> for Store {
    fn collection(&self) -> &RwLock<Collection<Location>> {
        &self.locations
    }
}

impl HasCollection<Event> for Store {
    fn collection(&self) -> &RwLock<Collection<Event>> {
        &self.events
    }
}

impl HasCollection<Participant> for Store {
    fn collection(&self) -> &RwLock<Collection<Participant>> {
        &self.participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EventDraft, LocationDraft, ParticipantDraft, UserDraft};
    use crate::id::SequenceGenerator;

    fn store() -> Store {
        Store::with_id_generator(Arc::new(SequenceGenerator::new()))
    }

    fn user_draft(username: &str) -> UserDraft {
        UserDraft {
            username: username.into(),
            email: format!("{}@example.com", username),
        }
    }

    fn event_draft(user_id: &str, location_id: &str) -> EventDraft {
        EventDraft {
            title: Some("meetup".into()),
            desc: None,
            date: None,
            from: None,
            to: None,
            location_id: location_id.into(),
            user_id: user_id.into(),
        }
    }

    #[test]
    fn related_user_returns_at_most_one() {
        let store = store();
        let user = store.users().create(user_draft("amy")).unwrap();
        store.users().create(user_draft("bob")).unwrap();
        let event = store
            .events()
            .create(event_draft(&user.id, "nowhere"))
            .unwrap();

        let related = store.related_user(&event).unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, user.id);
    }

    #[test]
    fn related_user_empty_for_dangling_foreign_key() {
        let store = store();
        let event = store
            .events()
            .create(event_draft("no-such-user", "no-such-location"))
            .unwrap();

        assert!(store.related_user(&event).unwrap().is_empty());
        assert!(store.related_location(&event).unwrap().is_empty());
    }

    #[test]
    fn related_location_matches_location_id() {
        let store = store();
        let location = store
            .locations()
            .create(LocationDraft {
                name: "park".into(),
                desc: None,
                lat: Some(41.0),
                lng: Some(29.0),
            })
            .unwrap();
        let event = store
            .events()
            .create(event_draft("someone", &location.id))
            .unwrap();

        let related = store.related_location(&event).unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].name, "park");
    }

    #[test]
    fn related_participants_join_on_event_id() {
        let store = store();
        let organizer = store.users().create(user_draft("amy")).unwrap();
        let event = store
            .events()
            .create(event_draft(&organizer.id, "loc"))
            .unwrap();
        let other_event = store
            .events()
            .create(event_draft(&organizer.id, "loc"))
            .unwrap();

        let attending = store
            .participants()
            .create(ParticipantDraft {
                user_id: "someone-else".into(),
                event_id: event.id.clone(),
            })
            .unwrap();
        store
            .participants()
            .create(ParticipantDraft {
                user_id: organizer.id.clone(),
                event_id: other_event.id.clone(),
            })
            .unwrap();

        let related = store.related_participants(&event).unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, attending.id);
    }

    #[test]
    fn clone_shares_storage() {
        let store = store();
        let clone = store.clone();

        store.users().create(user_draft("amy")).unwrap();

        let listed = clone.users().list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].username, "amy");
    }
}
