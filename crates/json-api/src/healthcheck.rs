//! `GET /healthcheck`: process liveness for load balancers and orchestrators.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum HealthStatus {
    Ok,
}

/// Liveness report
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthReport {
    pub status: HealthStatus,

    /// Package version of the running binary
    pub version: String,
}

/// Report that the catalog process is serving requests.
///
/// The database is not consulted, so a slow pool never fails the check.
#[endpoint(tags("health"), summary = "Catalog liveness")]
pub(crate) async fn handler() -> Json<HealthReport> {
    Json(HealthReport {
        status: HealthStatus::Ok,
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
