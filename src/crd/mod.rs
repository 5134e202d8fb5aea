//! Custom Resource Definitions (CRDs) for cephcluster-admission.
//!
//! - `CephCluster`: the Rook cluster resource guarded by the admission rules

mod ceph_cluster;

pub use ceph_cluster::*;
