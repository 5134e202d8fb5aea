//! CephCluster resource validator.
//!
//! Entry points called by the admission layer for each write to a CephCluster.
//! Every call is a synchronous function of its inputs; the validator holds no
//! per-request state and can be shared freely between worker threads.

use tracing::{Dispatch, dispatcher, info};

use crate::crd::CephClusterSpec;
use crate::webhooks::error::Result;
use crate::webhooks::policies::{external_mode, immutability};

/// Validates create, update and delete requests for CephCluster specs.
///
/// Log events are emitted through the dispatcher supplied at construction.
#[derive(Clone, Debug)]
pub struct ClusterValidator {
    dispatch: Dispatch,
}

impl ClusterValidator {
    /// Create a validator that logs through `dispatch`.
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Create a validator bound to the dispatcher that is current on this thread.
    pub fn from_current() -> Self {
        Self::new(dispatcher::get_default(Dispatch::clone))
    }

    /// Validate a cluster that is about to be created.
    pub fn validate_create(&self, spec: &CephClusterSpec) -> Result<()> {
        self.log(|| {
            info!(
                external_mode = spec.external_mode_enabled(),
                "validate create cephcluster"
            )
        });
        external_mode::validate(spec)
    }

    /// Validate an update of an existing cluster against its prior spec.
    pub fn validate_update(&self, updated: &CephClusterSpec, prior: &CephClusterSpec) -> Result<()> {
        self.log(|| info!("validate update cephcluster"));
        immutability::validate(updated, prior)
    }

    /// Deletion is always permitted.
    pub fn validate_delete(&self, _spec: &CephClusterSpec) -> Result<()> {
        Ok(())
    }

    fn log(&self, event: impl FnOnce()) {
        dispatcher::with_default(&self.dispatch, event);
    }
}

impl Default for ClusterValidator {
    fn default() -> Self {
        Self::from_current()
    }
}
