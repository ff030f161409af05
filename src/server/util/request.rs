//! Request-derived values extracted directly in handler signatures.

use std::{convert::Infallible, net::SocketAddr};

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, FromRequest, FromRequestParts, Request},
    http::{header, request::Parts},
    Json,
};

use crate::server::{error::AppError, state::AppState};

/// JSON request body whose parse failures surface as `400 Bad Request` with an
/// `ErrorDto` body instead of axum's plain-text `422`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// Network address of the caller.
///
/// Prefers the first entry of `X-Forwarded-For` so deployments behind a reverse proxy
/// record the real client, then falls back to the socket peer address. `None` when
/// neither is available, e.g. when the router is driven without connect info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub Option<String>);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        if forwarded.is_some() {
            return Ok(Self(forwarded));
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(Self(peer))
    }
}

/// Base URL that uploaded file links are built on.
///
/// Uses the configured application URL when present, otherwise `http://` plus the
/// request's `Host` header, falling back to `http://localhost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(pub String);

impl FromRequestParts<AppState> for BaseUrl {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(app_url) = &state.app_url {
            return Ok(Self(app_url.clone()));
        }

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("localhost");

        Ok(Self(format!("http://{}", host)))
    }
}
