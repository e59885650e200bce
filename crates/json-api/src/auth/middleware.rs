//! Auth middleware.

use std::sync::Arc;

use ramal_app::auth::AuthServiceError;
use salvo::{http::header::AUTHORIZATION, prelude::*, writing::Scribe};
use tracing::debug;

use crate::{auth::into_api_error, extensions::*, state::State};

/// Admits requests carrying a valid admin bearer token.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(error) => {
            error.render(res);
            ctrl.skip_rest();

            return;
        }
    };

    let verified = bearer_token(req).and_then(|token| state.app.auth.verify(token));

    match verified {
        Ok(subject) => {
            debug!(admin = %subject, "bearer token accepted");

            ctrl.call_next(req, depot, res).await;
        }
        Err(error) => {
            debug!("rejecting bearer token: {error}");

            into_api_error(error).render(res);
            ctrl.skip_rest();
        }
    }
}

/// Token carried by the `Authorization` header.
///
/// Only an absent header or an empty value counts as missing. Any other
/// value, whatever its scheme, is left for verification to reject.
fn bearer_token(req: &Request) -> Result<&str, AuthServiceError> {
    let value = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthServiceError::TokenMissing)?
        .to_str()
        .map_err(|_ignored| AuthServiceError::TokenInvalid)?
        .trim();

    let token = match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        None if value.eq_ignore_ascii_case("bearer") => "",
        _ => value,
    };

    if token.is_empty() {
        return Err(AuthServiceError::TokenMissing);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use ramal_app::auth::MockAuthService;
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::{errors::MessageResponse, test_helpers::state_with_auth};

    use super::*;

    #[salvo::handler]
    async fn protected(res: &mut Response) {
        res.render("reached");
    }

    fn make_service(auth: MockAuthService) -> Service {
        let router = Router::new()
            .hoop(inject(state_with_auth(auth)))
            .hoop(handler)
            .push(Router::new().get(protected));

        Service::new(router)
    }

    async fn rejection(auth: MockAuthService, header: Option<&str>) -> TestResult<(StatusCode, String)> {
        let mut request = TestClient::get("http://example.com");

        if let Some(header) = header {
            request = request.add_header(AUTHORIZATION, header, true);
        }

        let mut res = request.send(&make_service(auth)).await;
        let body: MessageResponse = res.take_json().await?;

        Ok((res.status_code.ok_or("missing status")?, body.message))
    }

    #[tokio::test]
    async fn missing_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_verify().never();

        let (status, message) = rejection(auth, None).await?;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Token não fornecido.");

        Ok(())
    }

    #[tokio::test]
    async fn bare_bearer_scheme_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_verify().never();

        let (status, message) = rejection(auth, Some("Bearer ")).await?;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Token não fornecido.");

        Ok(())
    }

    #[tokio::test]
    async fn non_bearer_authorization_header_returns_403() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_verify()
            .once()
            .withf(|token| token == "Basic abc123")
            .return_once(|_| Err(AuthServiceError::TokenInvalid));

        let (status, message) = rejection(auth, Some("Basic abc123")).await?;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(message, "Token inválido.");

        Ok(())
    }

    #[tokio::test]
    async fn expired_token_returns_403() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_verify()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Err(AuthServiceError::TokenExpired));

        let (status, message) = rejection(auth, Some("Bearer abc123")).await?;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(message, "Token expirado.");

        Ok(())
    }

    #[tokio::test]
    async fn invalid_token_returns_403() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_verify()
            .once()
            .return_once(|_| Err(AuthServiceError::TokenInvalid));

        let (status, message) = rejection(auth, Some("Bearer forged")).await?;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(message, "Token inválido.");

        Ok(())
    }

    #[tokio::test]
    async fn valid_token_reaches_protected_route() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_verify()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Ok("admin".to_owned()));

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "bearer abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "reached");

        Ok(())
    }
}
