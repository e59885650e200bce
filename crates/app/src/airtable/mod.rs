//! Airtable record store.

mod client;
mod config;
mod formula;

pub use client::{AirtableClient, AirtableError, AirtableRecord};
pub use config::*;
pub use formula::*;
