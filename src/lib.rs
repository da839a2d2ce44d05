//! Solobooks - Personal finance backend for freelancers.
//!
//! Transaction and task tracking with a Pro entitlement unlocked by a
//! payment-provider webhook, plus LLM-assisted transaction categorization.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
