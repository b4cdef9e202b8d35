//! Shared identity contracts for every Money Market BI entity.
//!
//! # Responsibility
//! - Define the numeric identity key shared by entities and relation views.
//! - Describe how an entity maps to its REST resource.
//!
//! # Invariants
//! - `id` is the sole identity key.
//! - A "new" entity is a structural copy with `id = None`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned numeric identity.
pub type EntityId = i64;

/// Anything that carries an entity identity.
///
/// Implemented by full entities and by narrowed relation views, so identity
/// helpers work across both.
pub trait Identified {
    fn id(&self) -> Option<EntityId>;
}

impl<T: Identified + ?Sized> Identified for &T {
    fn id(&self) -> Option<EntityId> {
        (**self).id()
    }
}

/// An entity exposed by the backend as a REST collection.
pub trait EntityResource:
    Identified + Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Plural path segment under `api/`, e.g. `fiscal-years`.
    const RESOURCE_PATH: &'static str;
    /// Singular camel-case name used in diagnostics.
    const ENTITY_NAME: &'static str;
    /// Wire names of date and date-time fields. These are always sent,
    /// as `null` when unset.
    const DATE_FIELDS: &'static [&'static str] = &[];

    fn set_id(&mut self, id: Option<EntityId>);

    /// Returns the not-yet-persisted variant of this entity.
    fn to_new(&self) -> Self {
        let mut copy = self.clone();
        copy.set_id(None);
        copy
    }
}

/// Reads a relation collection that the backend may send as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
