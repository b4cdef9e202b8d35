//! Entity use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for one entity type.
//! - Delegate persistence to repository implementations.
//! - Expose identity helpers alongside the operations that need them.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - `save` creates unsaved entities and updates saved ones.

use crate::model::entity::{EntityId, EntityResource, Identified};
use crate::repo::entity_repo::{EntityRepository, EntityResponse, RepoResult};
use crate::repo::query::QueryOptions;
use crate::service::identity;
use log::info;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Use-case service wrapper for one entity type.
pub struct EntityService<T, R> {
    repo: R,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, R> EntityService<T, R>
where
    T: EntityResource,
    R: EntityRepository<T>,
{
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _phantom: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Creates a new entity. Any id on the input is ignored.
    pub async fn create(&self, entity: &T) -> RepoResult<EntityResponse<T>> {
        self.repo.create(entity).await
    }

    /// Replaces a saved entity.
    pub async fn update(&self, entity: &T) -> RepoResult<EntityResponse<T>> {
        self.repo.update(entity).await
    }

    pub async fn partial_update(&self, entity: &T) -> RepoResult<EntityResponse<T>> {
        self.repo.partial_update(entity).await
    }

    pub async fn find(&self, id: EntityId) -> RepoResult<EntityResponse<T>> {
        self.repo.find(id).await
    }

    pub async fn query(&self, options: &QueryOptions) -> RepoResult<EntityResponse<Vec<T>>> {
        self.repo.query(options).await
    }

    pub async fn delete(&self, id: EntityId) -> RepoResult<EntityResponse<()>> {
        let response = self.repo.delete(id).await?;
        info!(
            "event=entity_deleted module=service status=ok entity={} id={}",
            T::ENTITY_NAME,
            id
        );
        Ok(response)
    }

    /// Free-text search. A failed search yields an empty response.
    pub async fn search(&self, options: &QueryOptions) -> EntityResponse<Vec<T>> {
        self.repo.search(options).await
    }

    /// Dispatches to `update` for saved entities and `create` otherwise.
    pub async fn save(&self, entity: &T) -> RepoResult<EntityResponse<T>> {
        match entity.id() {
            Some(_) => self.update(entity).await,
            None => self.create(entity).await,
        }
    }

    pub fn get_identifier(&self, entity: &T) -> Option<EntityId> {
        identity::get_identifier(entity)
    }

    /// See [`identity::compare`].
    pub fn compare<A, B>(&self, a: Option<&A>, b: Option<&B>) -> bool
    where
        A: Identified + ?Sized,
        B: Identified + ?Sized,
    {
        identity::compare(a, b)
    }

    /// See [`identity::add_to_collection_if_missing`].
    pub fn add_to_collection_if_missing<'a, 'b, I>(
        &self,
        collection: &'a [T],
        candidates: I,
    ) -> Cow<'a, [T]>
    where
        T: 'b,
        I: IntoIterator<Item = Option<&'b T>>,
    {
        identity::add_to_collection_if_missing(collection, candidates)
    }
}
