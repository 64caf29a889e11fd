//! Domain records: User, Location, Event, Participant.
//!
//! Each entity comes in three shapes: the record itself (id included), a
//! `Draft` for creation (everything but the id), and a `Patch` for shallow-
//! merge updates (every field optional, deserializable from a partial JSON
//! object). Foreign keys (`user_id`, `location_id`, `event_id`) are plain
//! ids and are never integrity-checked by the store.

use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Record for User {
    const COLLECTION: &'static str = "users";
    type Draft = UserDraft;
    type Patch = UserPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: UserDraft) -> Self {
        Self {
            id,
            username: draft.username,
            email: draft.email,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }

    fn alt_key(&self) -> Option<&str> {
        Some(&self.username)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub desc: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LocationDraft {
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LocationPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Record for Location {
    const COLLECTION: &'static str = "locations";
    type Draft = LocationDraft;
    type Patch = LocationPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: LocationDraft) -> Self {
        Self {
            id,
            name: draft.name,
            desc: draft.desc,
            lat: draft.lat,
            lng: draft.lng,
        }
    }

    fn apply_patch(&mut self, patch: LocationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(desc) = patch.desc {
            self.desc = Some(desc);
        }
        if let Some(lat) = patch.lat {
            self.lat = Some(lat);
        }
        if let Some(lng) = patch.lng {
            self.lng = Some(lng);
        }
    }

    fn alt_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub location_id: String,
    pub user_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EventDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    pub location_id: String,
    pub user_id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct EventPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Record for Event {
    const COLLECTION: &'static str = "events";
    type Draft = EventDraft;
    type Patch = EventPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            desc: draft.desc,
            date: draft.date,
            from: draft.from,
            to: draft.to,
            location_id: draft.location_id,
            user_id: draft.user_id,
        }
    }

    fn apply_patch(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(desc) = patch.desc {
            self.desc = Some(desc);
        }
        if let Some(date) = patch.date {
            self.date = Some(date);
        }
        if let Some(from) = patch.from {
            self.from = Some(from);
        }
        if let Some(to) = patch.to {
            self.to = Some(to);
        }
        if let Some(location_id) = patch.location_id {
            self.location_id = location_id;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }

    fn alt_key(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ParticipantDraft {
    pub user_id: String,
    pub event_id: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ParticipantPatch {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
}

impl Record for Participant {
    const COLLECTION: &'static str = "participants";
    type Draft = ParticipantDraft;
    type Patch = ParticipantPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ParticipantDraft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            event_id: draft.event_id,
        }
    }

    fn apply_patch(&mut self, patch: ParticipantPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(event_id) = patch.event_id {
            self.event_id = event_id;
        }
    }

    fn alt_key(&self) -> Option<&str> {
        Some(&self.event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_patch_overwrites_only_supplied_fields() {
        let mut user = User {
            id: "1".into(),
            username: "amy".into(),
            email: "a@x.com".into(),
        };

        user.apply_patch(UserPatch {
            email: Some("a2@x.com".into()),
            ..Default::default()
        });

        assert_eq!(user.username, "amy");
        assert_eq!(user.email, "a2@x.com");
    }

    #[test]
    fn patch_deserializes_from_partial_json() {
        let patch: EventPatch = serde_json::from_str(r#"{"title":"picnic"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("picnic"));
        assert!(patch.location_id.is_none());
        assert!(patch.user_id.is_none());
    }

    #[test]
    fn event_alt_key_is_title() {
        let event = Event {
            id: "1".into(),
            title: Some("picnic".into()),
            desc: None,
            date: None,
            from: None,
            to: None,
            location_id: "loc-1".into(),
            user_id: "user-1".into(),
        };
        assert_eq!(event.alt_key(), Some("picnic"));

        let untitled = Event {
            title: None,
            ..event
        };
        assert_eq!(untitled.alt_key(), None);
    }
}
