//! API Status Handler

use salvo::prelude::*;

use crate::errors::MessageResponse;

const ONLINE_MESSAGE: &str = "API do Portal de Acessos online! 🔥";

/// Liveness probe for the API namespace.
#[salvo::handler]
pub(crate) async fn handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(ONLINE_MESSAGE))
}
