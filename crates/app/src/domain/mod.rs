//! Domain

pub mod agents;
