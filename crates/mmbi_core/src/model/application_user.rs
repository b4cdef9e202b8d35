//! Application user entity.

use crate::model::entity::{null_as_empty, EntityId, EntityResource, Identified};
use crate::model::placeholder::PlaceholderRef;
use crate::model::security_clearance::SecurityClearanceRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationUser {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub designation: Option<String>,
    /// Login identity in the identity provider.
    #[serde(default)]
    pub application_identity: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub security_clearance: Option<SecurityClearanceRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub placeholders: Vec<PlaceholderRef>,
}

/// Display projection of an application user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationUserRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub application_identity: Option<String>,
}

impl Identified for ApplicationUser {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Identified for ApplicationUserRef {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl EntityResource for ApplicationUser {
    const RESOURCE_PATH: &'static str = "application-users";
    const ENTITY_NAME: &'static str = "applicationUser";

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}

impl From<&ApplicationUser> for ApplicationUserRef {
    fn from(value: &ApplicationUser) -> Self {
        Self {
            id: value.id,
            application_identity: value.application_identity.clone(),
        }
    }
}
