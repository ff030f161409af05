mod form;
mod news;
mod response;
