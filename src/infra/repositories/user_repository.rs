//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// One instance owns the (pooled) store connection; committed writes are
/// visible to subsequent reads through the same instance.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by the email/password login pair
    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>>;

    /// Persist a new user; the returned entity always carries its assigned id
    async fn save(&self, user: NewUser) -> AppResult<User>;

    /// Apply the mutable fields of an existing user by identity
    async fn update(&self, user: &User) -> AppResult<()>;

    /// Delete by id; true iff a row existed and was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository over SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find().all(&self.db).await?;

        models.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::Password.eq(password))
            .one(&self.db)
            .await?;

        result.map(User::try_from).transpose()
    }

    async fn save(&self, user: NewUser) -> AppResult<User> {
        let active = ActiveModel::from(user);

        let model = active.insert(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("email"),
                _ => AppError::from(e),
            }
        })?;

        model.try_into()
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let active = ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            birthday: Set(user.birthday),
            role: Set(user.role.as_str().to_string()),
            gender: Set(user.gender.as_str().to_string()),
        };

        active.update(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("email"),
                _ => match e {
                    DbErr::RecordNotUpdated => AppError::NotFound,
                    e => AppError::from(e),
                },
            }
        })?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
