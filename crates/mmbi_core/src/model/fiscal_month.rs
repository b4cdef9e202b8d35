//! Fiscal month entity.

use crate::model::entity::{null_as_empty, EntityId, EntityResource, Identified};
use crate::model::fiscal_quarter::FiscalQuarterRef;
use crate::model::fiscal_year::FiscalYearRef;
use crate::model::placeholder::PlaceholderRef;
use crate::model::wire_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalMonth {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub month_number: Option<i32>,
    #[serde(default, with = "wire_date::date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "wire_date::date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub fiscal_month_code: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<FiscalYearRef>,
    #[serde(default)]
    pub fiscal_quarter: Option<FiscalQuarterRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub placeholders: Vec<PlaceholderRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalMonthRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub fiscal_month_code: Option<String>,
}

impl Identified for FiscalMonth {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Identified for FiscalMonthRef {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl EntityResource for FiscalMonth {
    const RESOURCE_PATH: &'static str = "fiscal-months";
    const ENTITY_NAME: &'static str = "fiscalMonth";
    const DATE_FIELDS: &'static [&'static str] = &["startDate", "endDate"];

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}

impl From<&FiscalMonth> for FiscalMonthRef {
    fn from(value: &FiscalMonth) -> Self {
        Self {
            id: value.id,
            fiscal_month_code: value.fiscal_month_code.clone(),
        }
    }
}
