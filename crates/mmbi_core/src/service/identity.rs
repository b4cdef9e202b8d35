//! Identity comparison and collection merging for entity selections.
//!
//! # Invariants
//! - Two references are the same entity iff their ids are equal.
//! - `add_to_collection_if_missing` never mutates its inputs and borrows the
//!   original collection back when nothing is added.

use crate::model::entity::{EntityId, Identified};
use std::borrow::Cow;
use std::collections::HashSet;

/// Returns the entity identifier, `None` for unsaved entities.
pub fn get_identifier<T: Identified + ?Sized>(entity: &T) -> Option<EntityId> {
    entity.id()
}

/// Identity equality with explicit absence handling.
///
/// - both absent: `true`
/// - exactly one absent: `false`
/// - otherwise: ids are equal
///
/// Accepts different types on each side, so a full entity can be compared
/// against a relation view.
pub fn compare<A, B>(a: Option<&A>, b: Option<&B>) -> bool
where
    A: Identified + ?Sized,
    B: Identified + ?Sized,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.id() == b.id(),
        _ => false,
    }
}

/// Merges candidates into `collection` by identity.
///
/// Absent candidates are skipped. New items (first occurrence per id, in
/// candidate order) come first, followed by the untouched collection. When
/// no candidate is new the original slice is returned borrowed.
pub fn add_to_collection_if_missing<'a, 'b, T, I>(
    collection: &'a [T],
    candidates: I,
) -> Cow<'a, [T]>
where
    T: Identified + Clone + 'b,
    I: IntoIterator<Item = Option<&'b T>>,
{
    let present: Vec<&T> = candidates.into_iter().flatten().collect();
    if present.is_empty() {
        return Cow::Borrowed(collection);
    }

    let mut known: HashSet<Option<EntityId>> =
        collection.iter().map(|entry| entry.id()).collect();
    let to_add: Vec<T> = present
        .into_iter()
        .filter(|candidate| known.insert(candidate.id()))
        .cloned()
        .collect();

    if to_add.is_empty() {
        return Cow::Borrowed(collection);
    }

    let mut merged = Vec::with_capacity(to_add.len() + collection.len());
    merged.extend(to_add);
    merged.extend_from_slice(collection);
    Cow::Owned(merged)
}
