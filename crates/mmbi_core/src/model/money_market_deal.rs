//! Money-market deal entity, one row of an uploaded report batch.

use crate::model::entity::{null_as_empty, EntityId, EntityResource, Identified};
use crate::model::placeholder::PlaceholderRef;
use crate::model::report_batch::ReportBatchRef;
use crate::model::wire_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyMarketDeal {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub deal_number: Option<String>,
    #[serde(default)]
    pub counterparty_name: Option<String>,
    #[serde(default, with = "wire_date::date")]
    pub trade_date: Option<NaiveDate>,
    #[serde(default, with = "wire_date::date")]
    pub value_date: Option<NaiveDate>,
    #[serde(default, with = "wire_date::date")]
    pub maturity_date: Option<NaiveDate>,
    /// ISO 4217 code.
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub principal_amount: Option<f64>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub report_batch: Option<ReportBatchRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub placeholders: Vec<PlaceholderRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyMarketDealRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub deal_number: Option<String>,
}

impl Identified for MoneyMarketDeal {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Identified for MoneyMarketDealRef {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl EntityResource for MoneyMarketDeal {
    const RESOURCE_PATH: &'static str = "money-market-deals";
    const ENTITY_NAME: &'static str = "moneyMarketDeal";
    const DATE_FIELDS: &'static [&'static str] = &["tradeDate", "valueDate", "maturityDate"];

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}

impl From<&MoneyMarketDeal> for MoneyMarketDealRef {
    fn from(value: &MoneyMarketDeal) -> Self {
        Self {
            id: value.id,
            deal_number: value.deal_number.clone(),
        }
    }
}
