use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct VerifyRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthRequiredResponse {
    pub required: bool,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/verify", post(verify))
        .route("/auth-required", get(auth_required))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/verify", tag = "Auth", request_body = VerifyRequest, responses(
    (status = 200, description = "Password accepted or no gate configured", body = VerifyResponse),
    (status = 401, description = "Password rejected", body = VerifyResponse)
))]
pub async fn verify(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> (StatusCode, Json<VerifyResponse>) {
    // Clients may send no body at all; anything unparsable counts as an
    // empty submission.
    let req: VerifyRequest = serde_json::from_slice(&body).unwrap_or_default();
    if ctx.gate().verify(&req.password) {
        (StatusCode::OK, Json(VerifyResponse { ok: true }))
    } else {
        (StatusCode::UNAUTHORIZED, Json(VerifyResponse { ok: false }))
    }
}

#[utoipa::path(get, path = "/api/auth-required", tag = "Auth", responses(
    (status = 200, body = AuthRequiredResponse)
))]
pub async fn auth_required(State(ctx): State<AppContext>) -> Json<AuthRequiredResponse> {
    Json(AuthRequiredResponse {
        required: ctx.gate().required(),
    })
}
