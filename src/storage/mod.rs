//! Post repository layer.
//!
//! This module provides the loader abstraction the store pulls posts through,
//! plus the implementations shipped with the crate. Loading is read-only:
//! nothing here writes posts back.
//!
//! # Modules
//!
//! - `backend`: [`PostLoader`] trait, implemented for async closures
//! - `json`: JSON file-backed loader
//! - `memory`: fixed in-memory loader
//! - `models`: repository response envelope

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::PostLoader;
pub use json::JsonFileLoader;
pub use memory::StaticLoader;
pub use models::PostsEnvelope;
