//! Bearer-token extractor for admin-only routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::domain::types::Admin;
use crate::error::EmployeesServiceError;
use crate::state::AppState;
use crate::usecase::token::AuthorizeAdminUseCase;

/// The admin named by a valid `Authorization: Bearer` token.
///
/// Rejects with 401 when the header is missing or malformed, the token fails
/// verification or has expired, or the admin it names no longer exists.
#[derive(Debug, Clone)]
pub struct AdminIdentity(pub Admin);

impl FromRequestParts<AppState> for AdminIdentity {
    type Rejection = EmployeesServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let bearer = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .map(|auth| auth.token().to_owned());
        let usecase = AuthorizeAdminUseCase {
            repo: state.admin_repo(),
            jwt_secret: state.jwt_secret.clone(),
        };

        async move {
            let admin = usecase.execute(bearer.as_deref()).await?;
            Ok(Self(admin))
        }
    }
}
