//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Gender, NewUser, Role, User};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub birthday: Date,
    pub role: String,
    pub gender: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Role/gender columns are written exclusively through the typed enums,
/// so a parse failure here means the row was corrupted out of band.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|e| AppError::internal(format!("corrupt role column for user {}: {}", model.id, e)))?;
        let gender = model
            .gender
            .parse::<Gender>()
            .map_err(|e| AppError::internal(format!("corrupt gender column for user {}: {}", model.id, e)))?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            password: model.password,
            birthday: model.birthday,
            role,
            gender,
        })
    }
}

/// Build an insertable active model from an unpersisted entity.
/// The primary key stays unset so the store assigns the identity.
impl From<NewUser> for ActiveModel {
    fn from(user: NewUser) -> Self {
        use sea_orm::ActiveValue::{NotSet, Set};

        ActiveModel {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password),
            birthday: Set(user.birthday),
            role: Set(user.role.as_str().to_string()),
            gender: Set(user.gender.as_str().to_string()),
        }
    }
}
