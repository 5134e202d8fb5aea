//! CephCluster Custom Resource Definition.
//!
//! Only the fields that admission validation reads are modelled here. Every
//! field falls back to its empty value when it is absent from the payload, so
//! a sub-configuration that was never written compares equal to its default.

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// CephCluster describes a Rook managed (or externally managed) Ceph cluster.
///
/// Example:
/// ```yaml
/// apiVersion: ceph.rook.io/v1
/// kind: CephCluster
/// metadata:
///   name: rook-ceph
///   namespace: rook-ceph
/// spec:
///   dataDirHostPath: /var/lib/rook
///   mon:
///     count: 3
///   network:
///     hostNetwork: false
/// ```
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "ceph.rook.io",
    version = "v1",
    kind = "CephCluster",
    plural = "cephclusters",
    shortname = "ceph",
    namespaced,
    printcolumn = r#"{"name":"DataDirHostPath", "type":"string", "jsonPath":".spec.dataDirHostPath"}"#,
    printcolumn = r#"{"name":"External", "type":"boolean", "jsonPath":".spec.external.enable"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase", default)]
pub struct CephClusterSpec {
    /// Connection to a Ceph cluster managed outside of this control plane.
    pub external: ExternalSpec,

    /// Host path where config and data are persisted. Immutable.
    pub data_dir_host_path: String,

    /// Monitor daemon settings.
    pub mon: MonSpec,

    /// Dashboard settings.
    pub dashboard: DashboardSpec,

    /// Prometheus monitoring settings.
    pub monitoring: MonitoringSpec,

    /// Disruption budget management.
    pub disruption_management: DisruptionManagementSpec,

    /// Manager daemon settings.
    pub mgr: MgrSpec,

    /// Network settings. `provider` and `hostNetwork` are immutable.
    pub network: NetworkSpec,
}

impl CephClusterSpec {
    /// Whether the storage cluster is managed externally.
    pub fn external_mode_enabled(&self) -> bool {
        self.external.enable
    }

    pub fn mgr_modules(&self) -> &[Module] {
        &self.mgr.modules
    }

    pub fn network_provider(&self) -> &str {
        &self.network.provider
    }

    pub fn network_selectors(&self) -> &BTreeMap<String, String> {
        &self.network.selectors
    }

    pub fn host_network_enabled(&self) -> bool {
        self.network.host_network
    }
}

/// External cluster connection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalSpec {
    pub enable: bool,
}

/// Monitor daemon placement and count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MonSpec {
    /// Number of monitors to run.
    pub count: i32,
    /// Allow more than one monitor per node.
    pub allow_multiple_per_node: bool,
}

/// Ceph dashboard settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSpec {
    pub enabled: bool,
    /// URL prefix when served behind a proxy.
    pub url_prefix: String,
    pub port: i32,
    /// Serve the dashboard over TLS.
    pub ssl: bool,
}

/// Prometheus monitoring settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MonitoringSpec {
    pub enabled: bool,
    /// Namespace where prometheus rules are deployed.
    pub rules_namespace: String,
    /// Manager prometheus exporter port for external clusters.
    pub external_mgr_prometheus_port: u16,
}

/// Pod disruption budget management.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DisruptionManagementSpec {
    pub manage_pod_budgets: bool,
    /// Minutes an OSD may stay down during maintenance.
    #[serde(rename = "osdMaintenanceTimeout")]
    pub osd_maintenance_timeout_minutes: i64,
    pub manage_machine_disruption_budgets: bool,
    pub machine_disruption_budget_namespace: String,
}

/// Manager daemon settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MgrSpec {
    /// Manager modules to enable, in order.
    pub modules: Vec<Module>,
}

/// A Ceph manager module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
    pub name: String,
    pub enabled: bool,
}

impl Module {
    /// Enabled module with the given name.
    pub fn enabled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
        }
    }
}

/// Cluster network settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkSpec {
    /// Network provider, empty for the default pod network.
    pub provider: String,
    /// Provider specific network selectors.
    pub selectors: BTreeMap<String, String>,
    /// Run daemons on the host network.
    pub host_network: bool,
}

/// Deep equality against the statically constructed empty value of a
/// sub-configuration.
pub trait Unset: Default + PartialEq {
    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

impl Unset for MonSpec {}
impl Unset for DashboardSpec {}
impl Unset for MonitoringSpec {}
impl Unset for DisruptionManagementSpec {}
