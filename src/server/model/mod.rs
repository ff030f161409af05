//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types carry client input as received; services validate them before any
//! write reaches the repositories.

pub mod comment;
pub mod form;
pub mod gallery;
pub mod member;
pub mod news;
