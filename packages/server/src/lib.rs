// Fruits Service - API Core
//
// This crate provides the backend for a small fruit inventory: entity rules,
// a storage-agnostic repository, an in-memory store, and the actions the HTTP
// layer calls. Architecture follows the domains/kernel/server split.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
