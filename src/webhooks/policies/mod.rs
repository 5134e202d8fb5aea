//! Validation policies for CephCluster admission.
//!
//! Policies are organized into tiers:
//! - Tier 1 (Create): Only enforced on CREATE operations (external mode exclusivity)
//! - Tier 2 (Update): Only enforced on UPDATE operations (immutability)
//!
//! Policies are pure functions of the specs they are given. Logging is left
//! to the caller.

pub mod external_mode;
pub mod immutability;
