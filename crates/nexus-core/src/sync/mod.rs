//! Deciding what to transfer between the server and the local filesystem
//!
//! This module provides:
//! - **compare**: whether a local source matches an asset's advertised checksum
//! - **plan**: per-asset skip/transfer decisions for a download

mod compare;
mod plan;

pub use compare::{CHECKSUM_PREFERENCE, preferred_checksum, same_content};
pub use plan::{SyncAction, SyncDecision, SyncPlan, SyncPlanner, TransferReason};
