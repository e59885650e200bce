//! Login Handler

use std::{fmt::Display, sync::Arc};

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::{auth::into_api_error, errors::ApiError, extensions::*, state::State};

/// Login Request
///
/// Absent fields compare as empty strings, so they fail as bad credentials.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Login Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

/// Exchange admin credentials for a short-lived bearer token.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let credentials = parse_credentials(req).await?;

    let token = state
        .app
        .auth
        .issue(&credentials.username, &credentials.password)
        .map_err(into_api_error)?;

    info!(user = %credentials.username, "admin token issued");

    Ok(Json(LoginResponse { token }))
}

async fn parse_credentials(req: &mut Request) -> Result<LoginRequest, ApiError> {
    let body = req
        .parse_json::<Map<String, Value>>()
        .await
        .map_err(invalid_body)?;

    if body.is_empty() {
        return Err(invalid_body("empty object"));
    }

    serde_json::from_value(Value::Object(body)).map_err(invalid_body)
}

fn invalid_body(error: impl Display) -> ApiError {
    debug!("rejecting login body: {error}");

    ApiError::bad_request("Requisição inválida.")
}
