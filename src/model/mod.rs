//! Wire-level request and response types shared by every endpoint.
//!
//! DTOs are serialized with camelCase field names. Server code converts them to domain
//! params at the controller boundary and builds them back from domain models before
//! responding.

pub mod api;
pub mod comment;
pub mod form;
pub mod gallery;
pub mod member;
pub mod news;
pub mod upload;
