//! cephcluster-admission library crate
//!
//! This module exports the CephCluster CRD types and the admission validator
//! that decides whether a create, update or delete may be admitted.

pub mod crd;
pub mod webhooks;

pub use webhooks::{ClusterValidator, ImmutableField, ValidationError};
