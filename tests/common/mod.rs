//! Test fixtures and builder patterns for CephCluster.

use cephcluster_admission::crd::{CephCluster, CephClusterSpec, ExternalSpec, Module};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde_json::{Value, json};

/// Builder for creating CephCluster test fixtures.
///
/// # Example
/// ```
/// let cluster = CephClusterBuilder::new("rook-ceph")
///     .data_dir_host_path("/var/lib/rook")
///     .host_network(true)
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct CephClusterBuilder {
    name: String,
    namespace: String,
    spec: CephClusterSpec,
}

impl CephClusterBuilder {
    /// Create a new builder with the given cluster name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: "rook-ceph".to_string(),
            spec: CephClusterSpec::default(),
        }
    }

    /// Enable external mode.
    pub fn external(mut self) -> Self {
        self.spec.external = ExternalSpec { enable: true };
        self
    }

    pub fn data_dir_host_path(mut self, path: impl Into<String>) -> Self {
        self.spec.data_dir_host_path = path.into();
        self
    }

    pub fn host_network(mut self, enabled: bool) -> Self {
        self.spec.network.host_network = enabled;
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.spec.network.provider = provider.into();
        self
    }

    pub fn mon_count(mut self, count: i32) -> Self {
        self.spec.mon.count = count;
        self
    }

    /// Add an enabled manager module.
    pub fn mgr_module(mut self, name: impl Into<String>) -> Self {
        self.spec.mgr.modules.push(Module::enabled(name));
        self
    }

    /// Build the CephCluster.
    pub fn build(self) -> CephCluster {
        CephCluster {
            metadata: ObjectMeta {
                name: Some(self.name),
                namespace: Some(self.namespace),
                ..Default::default()
            },
            spec: self.spec,
        }
    }
}

/// Wrap clusters into an AdmissionReview JSON document.
pub fn admission_review(
    operation: &str,
    object: Option<&CephCluster>,
    old_object: Option<&CephCluster>,
) -> Value {
    json!({
        "apiVersion": "admission.k8s.io/v1",
        "kind": "AdmissionReview",
        "request": {
            "uid": "3c3b9a4e-1b6f-4c1f-9a8e-6d8f1f0c2a11",
            "kind": {"group": "ceph.rook.io", "version": "v1", "kind": "CephCluster"},
            "resource": {"group": "ceph.rook.io", "version": "v1", "resource": "cephclusters"},
            "name": "rook-ceph",
            "namespace": "rook-ceph",
            "operation": operation,
            "userInfo": {"username": "system:admin"},
            "object": object,
            "oldObject": old_object,
            "dryRun": false
        }
    })
}
