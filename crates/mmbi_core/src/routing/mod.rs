//! Route resolution for entity screens.

pub mod resolver;
