//! Get Agent Handler

use std::sync::Arc;

use salvo::prelude::*;

use ramal_app::agents::records::AgentFields;

use crate::{
    agents::errors::{Operation, into_api_error},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Look up the agent registered under the `ramal` query parameter.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<AgentFields>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let ramal = req.query::<String>("ramal").unwrap_or_default();

    let agent = state
        .app
        .agents
        .get_agent(&ramal)
        .await
        .map_err(|error| into_api_error(error, Operation::Lookup))?;

    Ok(Json(agent))
}
