//! Bearer-token verification for tokens issued by the account service.

use std::future::{ready, Ready};

use actix_web::http::header::AUTHORIZATION;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: usize,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
    }
}

/// An authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }
}

fn authenticate(req: &HttpRequest) -> Result<Claims, AppError> {
    let keys = req
        .app_data::<web::Data<JwtKeys>>()
        .ok_or_else(|| AppError::Internal("JWT keys are not configured".into()))?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AppError::Unauthorized("Missing auth"))?;
    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.split_whitespace().nth(1))
        .ok_or(AppError::Unauthorized("Invalid token"))?;

    keys.verify(token).map_err(|e| {
        log::debug!("rejected bearer token: {e}");
        AppError::Unauthorized("Invalid token")
    })
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(AuthUser))
    }
}

/// An authenticated caller carrying the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = authenticate(req).and_then(|claims| {
            if claims.is_admin() {
                Ok(AdminUser(claims))
            } else {
                Err(AppError::Forbidden("Admin only"))
            }
        });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: &str, exp: usize) -> Claims {
        Claims {
            id: "u1".into(),
            role: role.into(),
            name: Some("Ana".into()),
            email: None,
            exp,
        }
    }

    fn far_future() -> usize {
        (chrono::Utc::now().timestamp() + 3600) as usize
    }

    #[test]
    fn signed_token_verifies() {
        let keys = JwtKeys::new("secret");
        let original = claims("user", far_future());
        let token = keys.sign(&original).unwrap();
        assert_eq!(keys.verify(&token).unwrap(), original);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = JwtKeys::new("one").sign(&claims("user", far_future())).unwrap();
        assert!(JwtKeys::new("two").verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = JwtKeys::new("secret");
        let token = keys.sign(&claims("user", 1)).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn admin_role() {
        assert!(claims("admin", 0).is_admin());
        assert!(!claims("user", 0).is_admin());
    }
}
