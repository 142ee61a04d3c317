//! Configuration for Strata.
//! TOML-based, deserialized with serde defaults.

pub mod projection_config;

pub use projection_config::{ProjectionConfig, ProjectionMode, SuffixLabel};
