//! Immutability validation policy.
//!
//! Tier 2 (Update): Only enforced on UPDATE operations
//!
//! Validates:
//! - dataDirHostPath, network.hostNetwork and network.provider cannot be
//!   changed after creation
//!
//! Fields are compared in a fixed order and only the first change is reported.

use crate::crd::CephClusterSpec;
use crate::webhooks::error::{ImmutableField, Result, ValidationError};

/// Validate immutability constraints between the prior and the updated spec
pub fn validate(updated: &CephClusterSpec, prior: &CephClusterSpec) -> Result<()> {
    if updated.data_dir_host_path != prior.data_dir_host_path {
        return Err(ValidationError::immutable(
            ImmutableField::DataDirHostPath,
            prior.data_dir_host_path.as_str(),
            updated.data_dir_host_path.as_str(),
        ));
    }

    if updated.host_network_enabled() != prior.host_network_enabled() {
        return Err(ValidationError::immutable(
            ImmutableField::HostNetwork,
            prior.host_network_enabled().to_string(),
            updated.host_network_enabled().to_string(),
        ));
    }

    if updated.network_provider() != prior.network_provider() {
        return Err(ValidationError::immutable(
            ImmutableField::Provider,
            prior.network_provider(),
            updated.network_provider(),
        ));
    }

    Ok(())
}
