//! eventbook - In-memory entity store for event-management domains.
//!
//! Four insertion-order-preserving collections (users, locations, events,
//! participants) with a uniform CRUD façade, foreign-key relationship
//! resolution computed at read time, and pluggable id generation. No
//! persistence, no indexing beyond linear scan, no transactions: the schema
//! or transport layer consuming this crate is expected to translate
//! [`StoreError::NotFound`] into its own not-found response.
//!
//! ## Example
//!
//! ```
//! use eventbook::{Store, UserDraft, UserPatch};
//!
//! let store = Store::new();
//!
//! let amy = store.users().create(UserDraft {
//!     username: "amy".into(),
//!     email: "a@x.com".into(),
//! })?;
//!
//! let amy = store.users().update(&amy.id, UserPatch {
//!     email: Some("a2@x.com".into()),
//!     ..Default::default()
//! })?;
//! assert_eq!(amy.username, "amy");
//!
//! store.users().delete_one(Some(&amy.id), None)?;
//! assert!(store.users().list()?.is_empty());
//! # Ok::<(), eventbook::StoreError>(())
//! ```

mod collection;
mod entities;
mod error;
mod facade;
mod id;
mod record;
mod store;

pub use collection::Collection;
pub use entities::{
    Event, EventDraft, EventPatch, Location, LocationDraft, LocationPatch, Participant,
    ParticipantDraft, ParticipantPatch, User, UserDraft, UserPatch,
};
pub use error::StoreError;
pub use facade::{Deleted, RecordSet};
pub use id::{IdGenerator, SequenceGenerator, UuidGenerator};
pub use record::Record;
pub use store::{HasCollection, Store};
