//! Client core for the Money Market BI microservice.
//! Entity models, REST repositories, identity helpers, form adapters and
//! route resolution shared by every entity screen.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod routing;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use form::entity_form::{EntityForm, FormControl, FormEntity, FormError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::application_user::{ApplicationUser, ApplicationUserRef};
pub use model::entity::{EntityId, EntityResource, Identified};
pub use model::fiscal_month::{FiscalMonth, FiscalMonthRef};
pub use model::fiscal_quarter::{FiscalQuarter, FiscalQuarterRef};
pub use model::fiscal_year::{FiscalYear, FiscalYearRef, FiscalYearStatus};
pub use model::money_market_deal::{MoneyMarketDeal, MoneyMarketDealRef};
pub use model::placeholder::{Placeholder, PlaceholderRef};
pub use model::report_batch::{ReportBatch, ReportBatchRef, ReportBatchStatus};
pub use model::security_clearance::{SecurityClearance, SecurityClearanceRef};
pub use model::upload_notification::UploadNotification;
pub use model::wire_date::WireDateError;
pub use repo::entity_repo::{
    EntityRepository, EntityResponse, RepoError, RepoResult, RestEntityRepository,
};
pub use repo::pagination::PageLinks;
pub use repo::query::{QueryOptions, QueryValidationError, SortDirection, SortOrder};
pub use repo::transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError,
};
pub use routing::resolver::{resolve_entity, Navigator, Resolution, RouteParams};
pub use service::entity_service::EntityService;
pub use service::identity::{add_to_collection_if_missing, compare, get_identifier};

/// REST service over HTTP for entity `T`.
pub type RestEntityService<T, H = ReqwestTransport> = EntityService<T, RestEntityRepository<T, H>>;

/// Builds a REST-backed service for `T` from configuration.
pub fn rest_service<T, H>(config: &AppConfig, transport: H) -> RestEntityService<T, H>
where
    T: EntityResource,
    H: HttpTransport,
{
    EntityService::new(RestEntityRepository::new(config, transport))
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
