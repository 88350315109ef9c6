//! User service - Orchestrates the create and login flows.
//!
//! `create` runs validator -> create mapper -> repository save -> read
//! mapper; any validation error aborts before mapping or persistence.
//! `login` delegates to the repository's combined lookup; a miss is a
//! normal outcome, not an error.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::user::{CreateUserDto, NewUser, UserDto};
use crate::domain::validator::CreateUserValidator;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Authenticate by email and password.
    ///
    /// Returns `Ok(None)` when no user matches the pair.
    async fn login(&self, email: &str, password: &str) -> AppResult<Option<UserDto>>;

    /// Register a new user.
    ///
    /// Fails with `AppError::Validation` carrying every field error when
    /// the input is invalid; nothing is persisted in that case.
    async fn create(&self, dto: CreateUserDto) -> AppResult<UserDto>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    validator: CreateUserValidator,
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with its collaborators
    pub fn new(validator: CreateUserValidator, repo: Arc<dyn UserRepository>) -> Self {
        Self { validator, repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn login(&self, email: &str, password: &str) -> AppResult<Option<UserDto>> {
        let user = self.repo.find_by_email_and_password(email, password).await?;

        Ok(user.map(UserDto::from))
    }

    async fn create(&self, dto: CreateUserDto) -> AppResult<UserDto> {
        let result = self.validator.validate(&dto);
        if result.has_errors() {
            return Err(AppError::Validation(result.into_errors()));
        }

        let new_user = NewUser::try_from(dto)?;
        let user = self.repo.save(new_user).await?;

        Ok(UserDto::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, Role, User};
    use crate::infra::MockUserRepository;
    use chrono::NaiveDate;

    fn stored_user(id: i32) -> User {
        User {
            id,
            name: "Ivan".to_string(),
            email: "test@gmail.com".to_string(),
            password: "123".to_string(),
            birthday: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            role: Role::User,
            gender: Gender::Male,
        }
    }

    fn create_dto() -> CreateUserDto {
        CreateUserDto {
            name: "Ivan".to_string(),
            email: "test@gmail.com".to_string(),
            password: "123".to_string(),
            birthday: "2000-01-01".to_string(),
            role: "USER".to_string(),
            gender: "MALE".to_string(),
        }
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(CreateUserValidator::new(), Arc::new(repo))
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email_and_password()
            .withf(|email, password| email == "test@gmail.com" && password == "123")
            .returning(|_, _| Ok(Some(stored_user(99))));

        let result = service(repo).login("test@gmail.com", "123").await.unwrap();

        let dto = result.expect("expected a logged-in user");
        assert_eq!(dto.id, 99);
        assert_eq!(dto, UserDto::from(stored_user(99)));
    }

    #[tokio::test]
    async fn test_login_miss_returns_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email_and_password()
            .returning(|_, _| Ok(None));

        let result = service(repo).login("dummy", "123").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_create_saves_mapped_entity_once() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .times(1)
            .withf(|new_user| {
                new_user.email == "test@gmail.com"
                    && new_user.role == Role::User
                    && new_user.gender == Gender::Male
                    && new_user.birthday == NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
            })
            .returning(|new_user| Ok(new_user.with_id(1)));

        let dto = service(repo).create(create_dto()).await.unwrap();

        assert_eq!(dto, UserDto::from(stored_user(1)));
    }

    #[tokio::test]
    async fn test_create_with_invalid_dto_touches_nothing() {
        // No expectations are set, so any repository call panics the test.
        let repo = MockUserRepository::new();
        let mut dto = create_dto();
        dto.birthday = "2000-01-01 12:23".to_string();

        let err = service(repo).create(dto).await.unwrap_err();

        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains_code("invalid.birthday"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_reports_all_field_errors() {
        let repo = MockUserRepository::new();
        let mut dto = create_dto();
        dto.birthday = "01-01-200".to_string();
        dto.role = "fake_role".to_string();
        dto.gender = "fake_gender".to_string();

        let err = service(repo).create(dto).await.unwrap_err();

        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.contains_code("invalid.birthday"));
                assert!(errors.contains_code("invalid.role"));
                assert!(errors.contains_code("invalid.gender"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_propagates_repository_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .returning(|_| Err(AppError::conflict("email")));

        let err = service(repo).create(create_dto()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }
}
