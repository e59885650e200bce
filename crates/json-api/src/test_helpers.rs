//! Test helpers.

use std::{path::PathBuf, sync::Arc};

use ramal_app::{agents::MockAgentsService, auth::MockAuthService, context::AppContext};
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_issue().never();
    auth.expect_verify().never();

    auth
}

fn strict_agents_mock() -> MockAgentsService {
    let mut agents = MockAgentsService::new();

    agents.expect_get_agent().never();
    agents.expect_create_agent().never();

    agents
}

fn state_with(agents: MockAgentsService, auth: MockAuthService, static_dir: PathBuf) -> Arc<State> {
    let app = AppContext {
        agents: Arc::new(agents),
        auth: Arc::new(auth),
    };

    State::shared(app, static_dir)
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_with(strict_agents_mock(), auth, default_static_dir())
}

pub(crate) fn state_with_agents(agents: MockAgentsService) -> Arc<State> {
    state_with(agents, strict_auth_mock(), default_static_dir())
}

pub(crate) fn state_with_static_dir(static_dir: PathBuf) -> Arc<State> {
    state_with(strict_agents_mock(), strict_auth_mock(), static_dir)
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_auth(auth))).push(route))
}

pub(crate) fn agents_service(agents: MockAgentsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_agents(agents)))
            .push(route),
    )
}
