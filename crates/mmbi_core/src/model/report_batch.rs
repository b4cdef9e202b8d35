//! Report batch entity: one uploaded money-market report file.
//!
//! # Invariants
//! - `report_date` is a calendar date; `upload_time_stamp` is an instant.

use crate::model::application_user::ApplicationUserRef;
use crate::model::entity::{EntityId, EntityResource, Identified};
use crate::model::wire_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Backend processing state of an uploaded batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportBatchStatus {
    Uploaded,
    Processing,
    Processed,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBatch {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, with = "wire_date::date")]
    pub report_date: Option<NaiveDate>,
    #[serde(default, with = "wire_date::date_time")]
    pub upload_time_stamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub process_flag: Option<ReportBatchStatus>,
    #[serde(default)]
    pub uploaded_by: Option<ApplicationUserRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBatchRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Identified for ReportBatch {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Identified for ReportBatchRef {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl EntityResource for ReportBatch {
    const RESOURCE_PATH: &'static str = "report-batches";
    const ENTITY_NAME: &'static str = "reportBatch";
    const DATE_FIELDS: &'static [&'static str] = &["reportDate", "uploadTimeStamp"];

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}

impl From<&ReportBatch> for ReportBatchRef {
    fn from(value: &ReportBatch) -> Self {
        Self {
            id: value.id,
            description: value.description.clone(),
        }
    }
}
