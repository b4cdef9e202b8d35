//! Placeholder entity: free-form tagging tokens attached to other records.

use crate::model::entity::{EntityId, EntityResource, Identified};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    /// Parent placeholder, if this one is nested.
    #[serde(default)]
    pub containing_placeholder: Option<PlaceholderRef>,
}

/// Display projection of a placeholder used by other entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Identified for Placeholder {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Identified for PlaceholderRef {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl EntityResource for Placeholder {
    const RESOURCE_PATH: &'static str = "placeholders";
    const ENTITY_NAME: &'static str = "placeholder";

    fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }
}

impl From<&Placeholder> for PlaceholderRef {
    fn from(value: &Placeholder) -> Self {
        Self {
            id: value.id,
            description: value.description.clone(),
        }
    }
}
