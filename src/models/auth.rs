//! Identity claims decoded from the auth-service JWT cookie.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Signs the claims into a JWT for the identity cookie.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Decodes and validates a JWT issued by the auth service.
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();
        let config = req.app_data::<web::Data<ServerConfig>>();

        let user = match (identity, config) {
            (Ok(identity), Some(config)) => identity
                .id()
                .map_err(|_| ErrorUnauthorized("no identity"))
                .and_then(|token| {
                    AuthenticatedUser::from_jwt(&token, &config.secret)
                        .map_err(|_| ErrorUnauthorized("invalid token"))
                }),
            _ => Err(ErrorUnauthorized("no identity")),
        };

        ready(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            roles: vec!["offers".to_string(), "offers_admin".to_string()],
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        }
    }

    #[test]
    fn jwt_round_trip() {
        let user = claims();
        let token = user.to_jwt("0123456789abcdef").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&token, "0123456789abcdef").unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn jwt_rejects_wrong_secret() {
        let token = claims().to_jwt("0123456789abcdef").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "another-secret").is_err());
    }
}
