//! Command implementations.

pub mod search;
