//! Entity model for the Money Market BI backend.
//!
//! # Responsibility
//! - Define the wire shape of every entity and its narrowed relation views.
//! - Own the date/date-time wire codec.
//!
//! # Invariants
//! - Every entity is identified by a numeric `EntityId`; `None` means the
//!   entity has not been persisted yet.
//! - Relation views (`*Ref`) carry `id` plus one label field and nothing else.

pub mod application_user;
pub mod entity;
pub mod fiscal_month;
pub mod fiscal_quarter;
pub mod fiscal_year;
pub mod money_market_deal;
pub mod placeholder;
pub mod report_batch;
pub mod security_clearance;
pub mod upload_notification;
pub mod wire_date;
