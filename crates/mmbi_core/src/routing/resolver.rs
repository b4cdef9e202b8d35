//! Route-level entity resolution.
//!
//! # Responsibility
//! - Turn a route's `id` parameter into the entity a screen needs.
//! - Redirect to the not-found route when the entity cannot be loaded.
//!
//! # Invariants
//! - No `id` resolves to `Create` without any upstream call.
//! - At most one `find` per resolution; nothing retries.
//! - `NotFound` is only returned after navigating to [`NOT_FOUND_ROUTE`].

use crate::model::entity::{EntityId, EntityResource};
use crate::repo::entity_repo::{EntityRepository, RepoError, RepoResult};
use crate::service::entity_service::EntityService;
use log::info;
use std::collections::BTreeMap;

pub const NOT_FOUND_ROUTE: &str = "404";
pub const ID_PARAM: &str = "id";

/// Route parameters by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: BTreeMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Returns the parameter, treating blank values as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Client-side navigation hook.
pub trait Navigator {
    fn navigate(&self, commands: &[&str]);
}

/// Outcome of resolving a route.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Found(T),
    /// No `id` in the route: the screen is creating a new entity.
    Create,
    /// Navigation to the not-found route was triggered; there is no entity.
    NotFound,
}

impl<T> Resolution<T> {
    pub fn into_entity(self) -> Option<T> {
        match self {
            Self::Found(entity) => Some(entity),
            Self::Create | Self::NotFound => None,
        }
    }
}

/// Resolves the entity addressed by `params` through `service`.
///
/// Empty bodies and `RepoError::NotFound` redirect to the not-found route.
/// Every other error propagates. An `id` that is not an integer redirects
/// without calling the backend.
pub async fn resolve_entity<T, R, N>(
    service: &EntityService<T, R>,
    params: &RouteParams,
    navigator: &N,
) -> RepoResult<Resolution<T>>
where
    T: EntityResource,
    R: EntityRepository<T>,
    N: Navigator + ?Sized,
{
    let Some(raw_id) = params.get(ID_PARAM) else {
        return Ok(Resolution::Create);
    };

    let Ok(id) = raw_id.parse::<EntityId>() else {
        return Ok(redirect_not_found::<T, N>(navigator, raw_id));
    };

    match service.find(id).await {
        Ok(response) => match response.body {
            Some(entity) => Ok(Resolution::Found(entity)),
            None => Ok(redirect_not_found::<T, N>(navigator, raw_id)),
        },
        Err(RepoError::NotFound { .. }) => Ok(redirect_not_found::<T, N>(navigator, raw_id)),
        Err(err) => Err(err),
    }
}

fn redirect_not_found<T: EntityResource, N: Navigator + ?Sized>(
    navigator: &N,
    raw_id: &str,
) -> Resolution<T> {
    info!(
        "event=route_not_found module=routing status=redirect entity={} id={}",
        T::ENTITY_NAME,
        raw_id
    );
    navigator.navigate(&[NOT_FOUND_ROUTE]);
    Resolution::NotFound
}

#[cfg(test)]
mod tests {
    use super::{Resolution, RouteParams};

    #[test]
    fn blank_params_are_absent() {
        let params = RouteParams::new().with("id", "  ").with("tab", "details");
        assert_eq!(params.get("id"), None);
        assert_eq!(params.get("tab"), Some("details"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn params_collect_from_pairs() {
        let params: RouteParams = [("id", "12")].into_iter().collect();
        assert_eq!(params.get("id"), Some("12"));
    }

    #[test]
    fn only_found_carries_an_entity() {
        assert_eq!(Resolution::Found(5).into_entity(), Some(5));
        assert_eq!(Resolution::<i32>::Create.into_entity(), None);
        assert_eq!(Resolution::<i32>::NotFound.into_entity(), None);
    }
}
