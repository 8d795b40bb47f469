//! Request extractors whose rejections render as `AppError`

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use todo_core::domain::OwnerId;

use crate::error::AppError;

/// Header carrying the acting owner's id
pub const OWNER_HEADER: &str = "x-owner-id";

/// The owner a request acts for
#[derive(Debug, Clone)]
pub struct Actor(pub OwnerId);

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("missing owner id"))?;

        OwnerId::new(raw)
            .map(Actor)
            .map_err(|_| AppError::unauthorized("missing owner id"))
    }
}

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
