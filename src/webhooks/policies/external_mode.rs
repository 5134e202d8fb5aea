//! External mode exclusivity policy.
//!
//! Tier 1 (Create): Only enforced on CREATE operations
//!
//! An externally managed cluster is configured outside this control plane, so
//! none of the locally managed sections may be set:
//! - mon, dashboard, monitoring and disruptionManagement must be empty
//! - no manager modules
//! - no network provider or selectors

use crate::crd::{CephClusterSpec, Unset};
use crate::webhooks::error::{Result, ValidationError};

/// Validate a new cluster spec against the external mode invariant
pub fn validate(spec: &CephClusterSpec) -> Result<()> {
    if !spec.external_mode_enabled() {
        return Ok(());
    }

    let locally_configured = !spec.mon.is_unset()
        || !spec.dashboard.is_unset()
        || !spec.monitoring.is_unset()
        || !spec.disruption_management.is_unset()
        || !spec.mgr_modules().is_empty()
        || !spec.network_provider().is_empty()
        || !spec.network_selectors().is_empty();

    if locally_configured {
        return Err(ValidationError::CreateInvariantViolation);
    }

    Ok(())
}
