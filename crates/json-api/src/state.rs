//! State

use std::{path::PathBuf, sync::Arc};

use ramal_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) static_dir: PathBuf,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, static_dir: PathBuf) -> Self {
        Self { app, static_dir }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, static_dir: PathBuf) -> Arc<Self> {
        Arc::new(Self::new(app, static_dir))
    }
}
