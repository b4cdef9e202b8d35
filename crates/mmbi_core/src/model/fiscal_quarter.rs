//! Fiscal quarter entity.

use crate::model::entity::{null_as_empty, EntityId, EntityResource, Identified};
use crate::model::fiscal_year::FiscalYearRef;
use crate::model::placeholder::PlaceholderRef;
use crate::model::wire_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalQuarter {
    #[serde(default)]
    pub id: Option<EntityId>,
    /// 1-based quarter number within the fiscal year.
    #[serde(default)]
    pub quarter_number: Option<i32>,
    #[serde(default, with = "wire_date::date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "wire_date::date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub fiscal_quarter_code: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<FiscalYearRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub placeholders: Vec<PlaceholderRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalQuarterRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub fiscal_quarter_code: Option<String>,
}

impl Identified for FiscalQuarter {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Identified for FiscalQuarterRef {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl EntityResource for FiscalQuarter {
    const RESOURCE_PATH: &'static str = "fiscal-quarters";
    const ENTITY_NAME: &'static str = "fiscalQuarter";
    const DATE_FIELDS: &'static [&'static str] = &["startDate", "endDate"];

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}

impl From<&FiscalQuarter> for FiscalQuarterRef {
    fn from(value: &FiscalQuarter) -> Self {
        Self {
            id: value.id,
            fiscal_quarter_code: value.fiscal_quarter_code.clone(),
        }
    }
}
