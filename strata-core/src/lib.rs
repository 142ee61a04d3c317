//! # strata-core
//!
//! Core types, error enums, configuration, and tracing setup for the
//! Strata architecture-conformance engine.

pub mod config;
pub mod errors;
pub mod trace;
pub mod types;
