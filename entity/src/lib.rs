//! SeaORM entity models for the association platform.

pub mod prelude;

pub mod comment;
pub mod form;
pub mod form_question;
pub mod form_response;
pub mod member;
pub mod news;
pub mod photo;
pub mod response_answer;
pub mod video;
