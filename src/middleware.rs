//! Turns `401 Unauthorized` responses from the page scope into a redirect to
//! the auth-service sign-in page configured in `ServerConfig`. The JSON API
//! scope is not wrapped and keeps returning bare 401s.

use std::future::{Ready, ready};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{Error, HttpResponse, web};
use futures_util::future::LocalBoxFuture;

use crate::models::config::ServerConfig;

// Used only when the app was assembled without a ServerConfig in app data.
const FALLBACK_SIGNIN_URL: &str = "/auth/signin";

pub struct RedirectUnauthorized;

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware { service }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let signin_url = req
            .app_data::<web::Data<ServerConfig>>()
            .map(|config| config.auth_service_url.clone())
            .unwrap_or_else(|| FALLBACK_SIGNIN_URL.to_string());
        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            if res.status() == StatusCode::UNAUTHORIZED {
                let (req, _) = res.into_parts();
                let redirect = HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, signin_url))
                    .finish()
                    .map_into_right_body();
                Ok(ServiceResponse::new(req, redirect))
            } else {
                Ok(res.map_into_left_body())
            }
        })
    }
}
