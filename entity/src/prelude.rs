pub use super::comment::Entity as Comment;
pub use super::form::Entity as Form;
pub use super::form_question::Entity as FormQuestion;
pub use super::form_response::Entity as FormResponse;
pub use super::member::Entity as Member;
pub use super::news::Entity as News;
pub use super::photo::Entity as Photo;
pub use super::response_answer::Entity as ResponseAnswer;
pub use super::video::Entity as Video;
