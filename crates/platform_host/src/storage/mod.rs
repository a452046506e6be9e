//! Durable storage contracts.

pub mod documents;
