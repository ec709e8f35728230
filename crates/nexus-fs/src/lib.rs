//! Local filesystem side of the Nexus 3 client
//!
//! Provides content digests for local files and format-agnostic loading of
//! definition files.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;

pub use checksum::{HashAlgorithm, LocalSource, calculate_hash, hash_bytes};
pub use config::ConfigStore;
pub use error::{Error, Result};
