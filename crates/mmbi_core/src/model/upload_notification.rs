//! Upload notification entity: a row-level message raised while a report
//! batch was being processed.

use crate::model::entity::{EntityId, EntityResource, Identified};
use crate::model::report_batch::ReportBatchRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadNotification {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub error_message: Option<String>,
    /// 1-based row in the uploaded file.
    #[serde(default)]
    pub row_number: Option<i32>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub report_batch: Option<ReportBatchRef>,
}

impl Identified for UploadNotification {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl EntityResource for UploadNotification {
    const RESOURCE_PATH: &'static str = "upload-notifications";
    const ENTITY_NAME: &'static str = "uploadNotification";

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}
