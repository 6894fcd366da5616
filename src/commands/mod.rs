//! Command implementations.

pub mod audit;
pub mod setup;
