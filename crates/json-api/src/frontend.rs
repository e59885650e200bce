//! Front-end asset serving.

use std::sync::Arc;

use salvo::{fs::NamedFile, prelude::*, serve_static::StaticDir, writing::Scribe};
use tracing::error;

use crate::{errors::ApiError, extensions::*, state::State};

const INDEX_FILE: &str = "index.html";

/// Serve the single-page front-end entry point.
#[salvo::handler]
pub(crate) async fn index(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            error.render(res);

            return;
        }
    };

    let path = state.static_dir.join(INDEX_FILE);

    match NamedFile::builder(&path).build().await {
        Ok(file) => file.send(req.headers(), res).await,
        Err(source) => {
            error!(path = %path.display(), "front-end entry point unavailable: {source}");

            ApiError::internal("Aplicação estática indisponível.").render(res);
        }
    }
}

/// Static asset router mounted under `/static`.
pub(crate) fn assets_router(state: &State) -> Router {
    Router::with_path("static/{**path}").get(StaticDir::new([state.static_dir.clone()]))
}
