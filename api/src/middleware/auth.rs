//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it with the `TokenService` registered as app data, and injects
//! the caller's identity into the request.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use rt_core::{
    domain::entities::token::Claims,
    errors::{AuthError, DomainError, TokenError},
    services::token::TokenService,
};

use crate::handlers::error::handle_domain_error;

/// User authentication context injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: i64,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: &Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .ok_or(DomainError::Token(TokenError::InvalidClaims))?;
        Ok(Self { user_id })
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let auth_context = match authenticate(&req) {
                Ok(context) => context,
                Err(error) => {
                    tracing::debug!(error = %error, "Rejected unauthenticated request");
                    let response = handle_domain_error(error);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            // Inject auth context into request extensions
            req.extensions_mut().insert(auth_context);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthContext, DomainError> {
    let token = extract_bearer_token(req).ok_or(AuthError::MissingToken)?;

    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| DomainError::Internal {
            message: "TokenService is not registered as app data".to_string(),
        })?;

    let claims = tokens.verify(&token)?;
    AuthContext::from_claims(&claims)
}

fn reject(error: DomainError) -> Error {
    let message = error.to_string();
    InternalError::from_response(message, handle_domain_error(error)).into()
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| reject(AuthError::MissingToken.into()));

        ready(result)
    }
}
