//! Form adapters between entities and editable control values.
//!
//! # Responsibility
//! - Build editable control state from an entity or new-entity defaults.
//! - Extract an entity from control state without validating it.

mod bindings;
pub mod entity_form;
