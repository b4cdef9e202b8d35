//! Security clearance entity.
//!
//! A clearance may grant other clearances; those links are display-only
//! projections and never nest further.

use crate::model::entity::{null_as_empty, EntityId, EntityResource, Identified};
use crate::model::placeholder::PlaceholderRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityClearance {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub clearance_level: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub granted_clearances: Vec<SecurityClearanceRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub placeholders: Vec<PlaceholderRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityClearanceRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub clearance_level: Option<String>,
}

impl Identified for SecurityClearance {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Identified for SecurityClearanceRef {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl EntityResource for SecurityClearance {
    const RESOURCE_PATH: &'static str = "security-clearances";
    const ENTITY_NAME: &'static str = "securityClearance";

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}

impl From<&SecurityClearance> for SecurityClearanceRef {
    fn from(value: &SecurityClearance) -> Self {
        Self {
            id: value.id,
            clearance_level: value.clearance_level.clone(),
        }
    }
}
