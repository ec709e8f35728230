//! Command implementations for nexus-cli

pub mod completions;
pub mod hash;
pub mod list;
pub mod plan;
pub mod policy;
pub mod resolve;

pub use completions::run_completions;
pub use hash::run_hash;
pub use list::run_list;
pub use plan::{PlanOptions, run_plan_download};
pub use policy::run_policy_render;
pub use resolve::run_resolve;
