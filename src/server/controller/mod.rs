//! HTTP request handlers.
//!
//! Handlers extract path, query, body and request metadata, convert DTOs to params,
//! call the matching service and convert the returned domain models back to DTOs.
//! Every handler is annotated with `utoipa::path` and listed in the router's OpenAPI
//! document.

pub mod comment;
pub mod form_admin;
pub mod form_public;
pub mod gallery;
pub mod health;
pub mod member;
pub mod news;
pub mod upload;
