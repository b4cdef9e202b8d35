//! Fiscal year entity.
//!
//! # Invariants
//! - `start_date`/`end_date` are calendar dates and cross the wire as
//!   `YYYY-MM-DD`.
//! - `last_updated_at` is an instant and crosses the wire as RFC 3339 UTC.

use crate::model::application_user::ApplicationUserRef;
use crate::model::entity::{null_as_empty, EntityId, EntityResource, Identified};
use crate::model::placeholder::PlaceholderRef;
use crate::model::wire_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FiscalYearStatus {
    Open,
    InProgress,
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalYear {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub fiscal_year_code: Option<String>,
    #[serde(default, with = "wire_date::date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "wire_date::date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub fiscal_year_status: Option<FiscalYearStatus>,
    #[serde(default, with = "wire_date::date_time")]
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<ApplicationUserRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub placeholders: Vec<PlaceholderRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalYearRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub fiscal_year_code: Option<String>,
}

impl Identified for FiscalYear {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Identified for FiscalYearRef {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl EntityResource for FiscalYear {
    const RESOURCE_PATH: &'static str = "fiscal-years";
    const ENTITY_NAME: &'static str = "fiscalYear";
    const DATE_FIELDS: &'static [&'static str] = &["startDate", "endDate", "lastUpdatedAt"];

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}

impl From<&FiscalYear> for FiscalYearRef {
    fn from(value: &FiscalYear) -> Self {
        Self {
            id: value.id,
            fiscal_year_code: value.fiscal_year_code.clone(),
        }
    }
}
