//! Agent directory domain, admin token authority and Airtable plumbing.

pub mod airtable;
pub mod auth;
pub mod context;
pub mod domain;

pub use domain::agents;

#[cfg(test)]
mod test;
