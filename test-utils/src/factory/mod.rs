//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the values
//! they care about. Each entity has a `*Factory` builder for customization and a
//! `create_*` shorthand for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::member::create_member(&db).await?;
//! let (form, questions) = factory::helpers::create_form_with_questions(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let form = factory::form::FormFactory::new(&db)
//!     .title("Inactive")
//!     .active(false)
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod form;
pub mod form_question;
pub mod form_response;
pub mod helpers;
pub mod member;
pub mod news;
pub mod photo;
pub mod video;

pub use comment::create_comment;
pub use form::create_form;
pub use form_question::create_question;
pub use form_response::create_response;
pub use member::create_member;
pub use news::create_news;
pub use photo::create_photo;
pub use video::create_video;
