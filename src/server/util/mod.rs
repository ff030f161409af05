pub mod date;
pub mod multipart;
pub mod parse;
pub mod request;
