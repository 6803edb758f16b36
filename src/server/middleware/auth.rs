//! Bearer token middleware
//!
//! Verifies `Authorization: Bearer <token>` and attaches the claims to the
//! request. Missing or invalid tokens are answered with 401.

use crate::auth::{Claims, JwtHandler};
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{HttpMessage, HttpRequest, ResponseError, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

/// JWT auth middleware for Actix-web
#[derive(Debug, Clone, Copy)]
pub struct JwtAuthMiddleware {
    required: bool,
}

impl JwtAuthMiddleware {
    /// Middleware that only enforces tokens when `required` is set
    pub fn new(required: bool) -> Self {
        Self { required }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service,
            required: self.required,
        }))
    }
}

/// Service implementation for the JWT middleware
pub struct JwtAuthMiddlewareService<S> {
    service: S,
    required: bool,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.required {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        match authenticate(&req) {
            Ok(claims) => {
                debug!("Bearer token accepted for user: {}", claims.sub);
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(e) => {
                warn!("Rejected request to {}: {}", req.path(), e);
                let response = e.error_response().map_into_right_body();
                let (request, _) = req.into_parts();
                Box::pin(async move { Ok(ServiceResponse::new(request, response)) })
            }
        }
    }
}

fn authenticate(req: &ServiceRequest) -> Result<Claims, ServiceError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| ServiceError::internal("Application state not configured"))?;

    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(JwtHandler::extract_token_from_header)
        .ok_or_else(|| ServiceError::auth("Missing bearer token"))?;

    state
        .auth
        .jwt()
        .verify_token(token)
        .map_err(|_| ServiceError::auth("Invalid or expired token"))
}

/// Claims attached by the middleware, if the route is protected
pub fn get_claims(req: &HttpRequest) -> Option<Claims> {
    req.extensions().get::<Claims>().cloned()
}
