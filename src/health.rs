//! Liveness and readiness checks.
//!
//! | Check | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the pod serve traffic? Failure → pulled from load-balancer. |

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Properties;
use crate::response::{IntoResponse, Json, Response};
use crate::Request;

#[derive(Debug, Serialize)]
struct Readiness {
    status: &'static str,
    properties: usize,
}

/// Always `200 OK` with body `"ok"`. If the process can answer HTTP at all,
/// it is alive.
pub async fn liveness(_req: Request, _props: Arc<Properties>) -> Response {
    Response::text("ok")
}

/// `200 OK` with the number of catalog properties loaded.
///
/// The catalog is loaded before the listener is bound, so a server that
/// answers is ready; an empty catalog is still a valid one.
pub async fn readiness(_req: Request, props: Arc<Properties>) -> Response {
    Json(Readiness { status: "ready", properties: props.len() }).into_response()
}
