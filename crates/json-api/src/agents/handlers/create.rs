//! Create Agent Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::{Map, Value};
use tracing::{debug, info};

use ramal_app::agents::records::AgentFields;

use crate::{
    agents::errors::{Operation, into_api_error},
    errors::{ApiError, MessageResponse},
    extensions::*,
    state::State,
};

/// Register a new agent from a JSON field-set containing `Ramal`.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = req
        .parse_json::<Map<String, Value>>()
        .await
        .map_err(|error| {
            debug!("rejecting agent body: {error}");

            ApiError::bad_request("Dados incompletos.")
        })?;

    let fields = AgentFields::try_from(body)
        .map_err(|error| into_api_error(error, Operation::Create))?;

    let ramal = state
        .app
        .agents
        .create_agent(fields)
        .await
        .map_err(|error| into_api_error(error, Operation::Create))?;

    info!(%ramal, "agent registered");

    res.status_code(StatusCode::CREATED);

    Ok(Json(MessageResponse::new(format!(
        "Agente (Ramal {ramal}) criado com sucesso."
    ))))
}
