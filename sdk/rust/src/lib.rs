//! Client for the env-service HTTP API.

pub mod client;
pub mod profile;

pub use client::EnvClient;
pub use mcs_env_profile::{EnvKey, EnvProfile, QuotedLiteral};
