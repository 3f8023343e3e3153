//! Shared fixtures and brute-force oracles for the integration tests.
//!
//! - `fixtures`: small named graphs and seeded random graphs
//! - `helpers`: exhaustive path and spanning-forest enumeration

pub mod fixtures;
pub mod helpers;
