//! App Router

use salvo::Router;

use crate::{agents, auth, frontend, state::State, status};

pub(crate) fn app_router(state: &State) -> Router {
    Router::new()
        .get(frontend::index)
        .push(frontend::assets_router(state))
        .push(
            Router::with_path("api")
                .get(status::handler)
                .push(Router::with_path("login").post(auth::login::handler))
                .push(Router::with_path("getAgent").get(agents::get::handler))
                .push(
                    Router::with_path("addAgent")
                        .hoop(auth::middleware::handler)
                        .post(agents::create::handler),
                ),
        )
}
