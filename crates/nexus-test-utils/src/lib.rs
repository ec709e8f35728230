//! Shared test utilities for the nexus3-cli workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`server`]: in-memory script store standing in for the REST transport
//! - [`policy`]: emulation of the cleanup-policy script
//! - [`artifacts`]: listing records and local file fixtures

pub mod artifacts;
pub mod policy;
pub mod server;

pub use policy::PolicyStore;
pub use server::{MemoryScriptServer, ScriptCall};
