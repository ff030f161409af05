use crate::model::member::{MemberDto, MemberInputDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub photo: Option<String>,
    pub blood: Option<String>,
    pub union: Option<String>,
    pub student_id: Option<String>,
    pub department: Option<String>,
    pub session: Option<String>,
    pub mobile: Option<String>,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            photo: entity.photo,
            blood: entity.blood,
            union: entity.union,
            student_id: entity.student_id,
            department: entity.department,
            session: entity.session,
            mobile: entity.mobile,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            name: self.name,
            photo: self.photo,
            blood: self.blood,
            union: self.union,
            student_id: self.student_id,
            department: self.department,
            session: self.session,
            mobile: self.mobile,
        }
    }
}

/// Member fields as received from a client, shared by create and full update.
#[derive(Debug, Clone, Default)]
pub struct MemberParams {
    pub name: String,
    pub photo: Option<String>,
    pub blood: Option<String>,
    pub union: Option<String>,
    pub student_id: Option<String>,
    pub department: Option<String>,
    pub session: Option<String>,
    pub mobile: Option<String>,
}

impl MemberParams {
    pub fn from_dto(dto: MemberInputDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            photo: dto.photo,
            blood: dto.blood,
            union: dto.union,
            student_id: dto.student_id,
            department: dto.department,
            session: dto.session,
            mobile: dto.mobile,
        }
    }
}
