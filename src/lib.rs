//! Persistence layer for the feed backend: entity models mapped to MongoDB
//! collections, a connection manager, and per-entity collection operations.

pub mod database;
pub mod models;
pub mod services;
pub mod utils;
