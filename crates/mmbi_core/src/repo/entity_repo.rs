//! Entity repository contract and REST implementation.
//!
//! # Responsibility
//! - Map the seven entity operations onto `{endpoint}/api/<plural>` calls.
//! - Convert HTTP exchanges into typed responses and semantic errors.
//!
//! # Invariants
//! - Every operation sends exactly one request and never retries.
//! - `create` always sends `id: null`; `update`/`partial_update` require an id.
//! - `partial_update` sends only set fields, plus `id` and every date field.
//! - `search` never fails: any failure becomes one `EntityResponse::empty()`.

use crate::config::AppConfig;
use crate::model::entity::{EntityId, EntityResource};
use crate::repo::pagination::{parse_total_count, PageLinks, LINK_HEADER, TOTAL_COUNT_HEADER};
use crate::repo::query::{QueryOptions, QueryValidationError};
use crate::repo::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

const SEARCH_SEGMENT: &str = "_search";
const NOT_FOUND_STATUS: u16 = 404;

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure of a repository operation.
#[derive(Debug)]
pub enum RepoError {
    /// No HTTP response was received.
    Transport(TransportError),
    /// The backend answered with a non-2xx status.
    Status { status: u16, body: Option<String> },
    /// The backend answered 404 for an addressed entity.
    NotFound {
        resource: &'static str,
        id: EntityId,
    },
    /// An id-addressed operation was given an unsaved entity.
    MissingId { resource: &'static str },
    InvalidQuery(QueryValidationError),
    Decode(serde_json::Error),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Status { status, .. } => write!(f, "backend responded with status {status}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::MissingId { resource } => {
                write!(f, "{resource} has no id; save it with create first")
            }
            Self::InvalidQuery(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "invalid response body: {err}"),
            Self::Encode(err) => write!(f, "cannot encode request body: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::InvalidQuery(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Status { .. } | Self::NotFound { .. } | Self::MissingId { .. } => None,
        }
    }
}

impl From<TransportError> for RepoError {
    fn from(value: TransportError) -> Self {
        Self::Transport(value)
    }
}

impl From<QueryValidationError> for RepoError {
    fn from(value: QueryValidationError) -> Self {
        Self::InvalidQuery(value)
    }
}

/// Typed view of one backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityResponse<B> {
    pub status: u16,
    /// `None` when the backend sent no body.
    pub body: Option<B>,
    /// From `X-Total-Count` on list responses.
    pub total_count: Option<u64>,
    pub links: PageLinks,
}

impl<B> EntityResponse<B> {
    /// The synthetic response substituted for a failed search.
    pub fn empty() -> Self {
        Self {
            status: 200,
            body: None,
            total_count: None,
            links: PageLinks::default(),
        }
    }

    pub fn into_body(self) -> Option<B> {
        self.body
    }
}

impl<T> EntityResponse<Vec<T>> {
    /// List items, empty when the response had no body.
    pub fn items(&self) -> &[T] {
        self.body.as_deref().unwrap_or(&[])
    }
}

/// Repository interface for one entity type.
#[async_trait]
pub trait EntityRepository<T: EntityResource>: Send + Sync {
    async fn create(&self, entity: &T) -> RepoResult<EntityResponse<T>>;
    async fn update(&self, entity: &T) -> RepoResult<EntityResponse<T>>;
    async fn partial_update(&self, entity: &T) -> RepoResult<EntityResponse<T>>;
    async fn find(&self, id: EntityId) -> RepoResult<EntityResponse<T>>;
    async fn query(&self, options: &QueryOptions) -> RepoResult<EntityResponse<Vec<T>>>;
    async fn delete(&self, id: EntityId) -> RepoResult<EntityResponse<()>>;
    /// Free-text search. Failures degrade to an empty response.
    async fn search(&self, options: &QueryOptions) -> EntityResponse<Vec<T>>;
}

/// REST-backed repository for entity `T`.
pub struct RestEntityRepository<T, H> {
    transport: H,
    resource_url: String,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: EntityResource, H: HttpTransport> RestEntityRepository<T, H> {
    pub fn new(config: &AppConfig, transport: H) -> Self {
        Self::with_resource_url(
            config.endpoint_for(&format!("api/{}", T::RESOURCE_PATH)),
            transport,
        )
    }

    pub fn with_resource_url(resource_url: impl Into<String>, transport: H) -> Self {
        Self {
            transport,
            resource_url: resource_url.into(),
            _phantom: PhantomData,
        }
    }

    pub fn resource_url(&self) -> &str {
        self.resource_url.as_str()
    }

    fn entity_url(&self, id: EntityId) -> String {
        format!("{}/{id}", self.resource_url)
    }

    fn require_id(entity: &T) -> RepoResult<EntityId> {
        entity.id().ok_or(RepoError::MissingId {
            resource: T::ENTITY_NAME,
        })
    }

    fn encode(entity: &T) -> RepoResult<Value> {
        serde_json::to_value(entity).map_err(RepoError::Encode)
    }

    /// Encodes a PATCH body: unset scalars, unset relations and empty
    /// collections are left out. Date fields stay, `null` when unset.
    fn encode_partial(entity: &T) -> RepoResult<Value> {
        let mut body = Self::encode(entity)?;
        if let Value::Object(fields) = &mut body {
            fields.retain(|name, value| match value {
                Value::Null => T::DATE_FIELDS.contains(&name.as_str()),
                Value::Array(items) => !items.is_empty(),
                _ => true,
            });
        }
        Ok(body)
    }

    /// Sends one request and maps non-2xx statuses to errors.
    ///
    /// `target` is the addressed id, used to report 404 as `NotFound`.
    async fn exchange(
        &self,
        request: HttpRequest,
        target: Option<EntityId>,
    ) -> RepoResult<HttpResponse> {
        let request_id = request.request_id;
        let method = request.method;
        debug!(
            "event=entity_request module=repo entity={} request_id={} method={} url={}",
            T::ENTITY_NAME,
            request_id,
            method,
            request.url
        );

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    "event=entity_request module=repo status=error entity={} request_id={} method={} error={}",
                    T::ENTITY_NAME, request_id, method, err
                );
                return Err(err.into());
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        warn!(
            "event=entity_request module=repo status=error entity={} request_id={} method={} http_status={}",
            T::ENTITY_NAME, request_id, method, response.status
        );
        match (response.status, target) {
            (NOT_FOUND_STATUS, Some(id)) => Err(RepoError::NotFound {
                resource: T::ENTITY_NAME,
                id,
            }),
            (status, _) => Err(RepoError::Status {
                status,
                body: response.body,
            }),
        }
    }

    fn into_entity_response<B: DeserializeOwned>(
        response: HttpResponse,
    ) -> RepoResult<EntityResponse<B>> {
        let body = match response.body.as_deref().map(str::trim) {
            None | Some("") | Some("null") => None,
            Some(text) => Some(serde_json::from_str::<B>(text).map_err(RepoError::Decode)?),
        };
        Ok(EntityResponse {
            status: response.status,
            body,
            total_count: parse_total_count(response.header(TOTAL_COUNT_HEADER)),
            links: response
                .header(LINK_HEADER)
                .map(PageLinks::parse)
                .unwrap_or_default(),
        })
    }

    async fn list(
        &self,
        url: String,
        options: &QueryOptions,
    ) -> RepoResult<EntityResponse<Vec<T>>> {
        let query = options.to_query_pairs()?;
        let request = HttpRequest::new(HttpMethod::Get, url).with_query(query);
        let response = self.exchange(request, None).await?;
        Self::into_entity_response(response)
    }
}

#[async_trait]
impl<T, H> EntityRepository<T> for RestEntityRepository<T, H>
where
    T: EntityResource,
    H: HttpTransport,
{
    async fn create(&self, entity: &T) -> RepoResult<EntityResponse<T>> {
        let body = Self::encode(&entity.to_new())?;
        let request = HttpRequest::new(HttpMethod::Post, self.resource_url.as_str()).with_body(body);
        let response = self.exchange(request, None).await?;
        Self::into_entity_response(response)
    }

    async fn update(&self, entity: &T) -> RepoResult<EntityResponse<T>> {
        let id = Self::require_id(entity)?;
        let request =
            HttpRequest::new(HttpMethod::Put, self.entity_url(id)).with_body(Self::encode(entity)?);
        let response = self.exchange(request, Some(id)).await?;
        Self::into_entity_response(response)
    }

    async fn partial_update(&self, entity: &T) -> RepoResult<EntityResponse<T>> {
        let id = Self::require_id(entity)?;
        let request = HttpRequest::new(HttpMethod::Patch, self.entity_url(id))
            .with_body(Self::encode_partial(entity)?);
        let response = self.exchange(request, Some(id)).await?;
        Self::into_entity_response(response)
    }

    async fn find(&self, id: EntityId) -> RepoResult<EntityResponse<T>> {
        let request = HttpRequest::new(HttpMethod::Get, self.entity_url(id));
        let response = self.exchange(request, Some(id)).await?;
        Self::into_entity_response(response)
    }

    async fn query(&self, options: &QueryOptions) -> RepoResult<EntityResponse<Vec<T>>> {
        self.list(self.resource_url.clone(), options).await
    }

    async fn delete(&self, id: EntityId) -> RepoResult<EntityResponse<()>> {
        let request = HttpRequest::new(HttpMethod::Delete, self.entity_url(id));
        let response = self.exchange(request, Some(id)).await?;
        Ok(EntityResponse {
            status: response.status,
            body: None,
            total_count: None,
            links: PageLinks::default(),
        })
    }

    async fn search(&self, options: &QueryOptions) -> EntityResponse<Vec<T>> {
        let url = format!("{}/{SEARCH_SEGMENT}", self.resource_url);
        match self.list(url, options).await {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    "event=entity_search module=repo status=degraded entity={} error={}",
                    T::ENTITY_NAME,
                    err
                );
                EntityResponse::empty()
            }
        }
    }
}
