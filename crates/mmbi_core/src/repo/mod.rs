//! Repository layer over the Money Market BI REST API.
//!
//! # Responsibility
//! - Define the entity data-access contract used by services.
//! - Keep HTTP and JSON details behind the `HttpTransport` seam.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `MissingId`) in
//!   addition to transport and status errors.
//! - No operation is retried.

pub mod entity_repo;
pub mod pagination;
pub mod query;
pub mod transport;
