//! Admission validation for CephCluster resources.
//!
//! This module provides the validating admission rules with tiered policies:
//! - Tier 1 (Create): External mode exclusivity
//! - Tier 2 (Update): Immutability of dataDirHostPath, hostNetwork and provider
//!
//! Deletes are always admitted.

pub mod error;
pub mod policies;
pub mod review;
pub mod validator;

pub use error::{ImmutableField, ValidationError};
pub use review::{respond, review};
pub use validator::ClusterValidator;

// Re-export kube-rs admission types for contract testing
pub use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
