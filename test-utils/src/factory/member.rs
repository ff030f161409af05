//! Member factory for creating test member entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .name("Alice")
///     .photo("http://localhost:4000/uploads/photo-1.png")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    photo: Option<String>,
    department: Option<String>,
    session: Option<String>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Member {id}"`
    /// - photo: `None`
    /// - department: `"CSE"`
    /// - session: `"2021-22"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Member {}", id),
            photo: None,
            department: Some("CSE".to_string()),
            session: Some("2021-22".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Builds and inserts the member entity into the database.
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            photo: ActiveValue::Set(self.photo),
            blood: ActiveValue::Set(None),
            union: ActiveValue::Set(None),
            student_id: ActiveValue::Set(None),
            department: ActiveValue::Set(self.department),
            session: ActiveValue::Set(self.session),
            mobile: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
