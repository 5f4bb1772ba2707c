//! HTTP middleware: JWT authentication.
//!
//! The middleware validates a Bearer token and stores the acting user's id
//! and role in the request extensions; handlers receive them through the
//! [`AuthUser`] extractor. On routes that mix public and authenticated
//! methods the extractor validates the token itself, so only fully
//! protected scopes need the middleware. Role checks happen in the handler
//! path via [`AuthUser::require_moderator`].

use crate::config::Config;
use crate::error::AppError;
use crate::models::user::UserRole;
use crate::security::jwt;
use actix_web::web;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;

/// Acting user identity extracted from a validated token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: UserRole,
}

impl AuthUser {
    /// Reject callers without the moderation capability.
    pub fn require_moderator(&self) -> Result<(), AppError> {
        if self.role.is_moderator() {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

/// Actix middleware that validates a Bearer token.
pub struct JwtAuthMiddleware {
    secret: Arc<String>,
}

impl JwtAuthMiddleware {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::new(secret.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
            secret: self.secret.clone(),
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
    secret: Arc<String>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let secret = self.secret.clone();

        Box::pin(async move {
            let user = validate_bearer(req.request(), &secret)?;
            req.extensions_mut().insert(user);

            service.call(req).await
        })
    }
}

/// Validate the Authorization header and map the claims to an [`AuthUser`].
fn validate_bearer(req: &HttpRequest, secret: &str) -> Result<AuthUser, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let token_data = jwt::validate_token(secret, token).map_err(|_| {
        tracing::debug!("token validation failed");
        AppError::Unauthorized
    })?;

    let user_id = Uuid::parse_str(&token_data.claims.sub).map_err(|_| AppError::Unauthorized)?;
    let role = UserRole::parse(&token_data.claims.role).ok_or(AppError::Unauthorized)?;

    Ok(AuthUser { id: user_id, role })
}

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        // Populated by the middleware on fully protected scopes; elsewhere
        // the extractor validates the token directly.
        if let Some(user) = req.extensions().get::<AuthUser>() {
            return ready(Ok(*user));
        }

        let result = match req.app_data::<web::Data<Config>>() {
            Some(config) => validate_bearer(req, &config.jwt_secret).map_err(Error::from),
            None => Err(Error::from(AppError::Internal(
                "application configuration missing".to_string(),
            ))),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_lacks_moderation_capability() {
        let user = AuthUser {
            id: Uuid::new_v4(),
            role: UserRole::Member,
        };
        assert!(matches!(
            user.require_moderator(),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_moderator_and_admin_pass() {
        for role in [UserRole::Moderator, UserRole::Admin] {
            let user = AuthUser {
                id: Uuid::new_v4(),
                role,
            };
            assert!(user.require_moderator().is_ok());
        }
    }
}
