//! Entity use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own the identity helpers shared by every entity screen.

pub mod entity_service;
pub mod identity;
