//! Admission review handling.
//!
//! Bridges an already-deserialized `AdmissionReview<CephCluster>` to the typed
//! validator entry points. Transport (HTTP, TLS) belongs to the caller; this
//! module only unwraps the generic request and shapes the response.

use kube::core::DynamicObject;
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
use tracing::{debug, error, info, warn};

use crate::crd::CephCluster;
use crate::webhooks::validator::ClusterValidator;

/// Create a denial response carrying `message` verbatim.
fn deny(request: &AdmissionRequest<CephCluster>, message: impl ToString) -> AdmissionResponse {
    AdmissionResponse::from(request).deny(message)
}

/// Answer a CephCluster admission review.
///
/// A review without a request yields an `invalid` response.
pub fn review(
    validator: &ClusterValidator,
    review: AdmissionReview<CephCluster>,
) -> AdmissionReview<DynamicObject> {
    let request: AdmissionRequest<CephCluster> = match review.try_into() {
        Ok(req) => req,
        Err(e) => {
            error!(error = %e, "Failed to extract admission request");
            return AdmissionResponse::invalid(format!("Invalid AdmissionReview: {}", e))
                .into_review();
        }
    };

    respond(validator, &request).into_review()
}

/// Decide a single admission request.
pub fn respond(
    validator: &ClusterValidator,
    request: &AdmissionRequest<CephCluster>,
) -> AdmissionResponse {
    let uid = &request.uid;
    debug!(
        uid = %uid,
        operation = ?request.operation,
        namespace = ?request.namespace,
        name = %request.name,
        "Processing admission request"
    );

    let outcome = match request.operation {
        Operation::Create => {
            let Some(cluster) = &request.object else {
                error!(uid = %uid, "Missing object in request");
                return deny(request, "Missing object in request");
            };
            validator.validate_create(&cluster.spec)
        }
        Operation::Update => {
            let (Some(cluster), Some(prior)) = (&request.object, &request.old_object) else {
                error!(uid = %uid, "Missing object or oldObject in update request");
                return deny(request, "Missing object or oldObject in update request");
            };
            validator.validate_update(&cluster.spec, &prior.spec)
        }
        Operation::Delete => match &request.old_object {
            Some(prior) => validator.validate_delete(&prior.spec),
            None => Ok(()),
        },
        Operation::Connect => Ok(()),
    };

    match outcome {
        Ok(()) => {
            info!(uid = %uid, operation = ?request.operation, "Admission request allowed");
            AdmissionResponse::from(request)
        }
        Err(err) => {
            warn!(
                uid = %uid,
                reason = err.reason(),
                message = %err,
                "Admission request denied"
            );
            deny(request, err)
        }
    }
}
