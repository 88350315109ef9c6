//! End-to-end service tests: create and login wired through the
//! composition root against an in-memory SQLite store.

use sea_orm::ConnectOptions;

use user_registry::domain::CreateUserDto;
use user_registry::errors::AppError;
use user_registry::infra::{Database, UserRepository, UserStore};
use user_registry::services::{ServiceContainer, Services, UserService};

async fn test_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    Database::connect_with(options)
        .await
        .expect("in-memory database")
}

fn create_dto(email: &str) -> CreateUserDto {
    CreateUserDto {
        name: "Ivan".to_string(),
        email: email.to_string(),
        password: "123".to_string(),
        birthday: "2000-01-01".to_string(),
        role: "USER".to_string(),
        gender: "MALE".to_string(),
    }
}

#[tokio::test]
async fn test_create_assigns_identity() {
    let db = test_database().await;
    let services = Services::from_connection(db.get_connection());

    let created = services
        .users()
        .create(create_dto("test@gmail.com"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.email, "test@gmail.com");
}

#[tokio::test]
async fn test_created_user_can_log_in() {
    let db = test_database().await;
    let services = Services::from_connection(db.get_connection());
    let created = services
        .users()
        .create(create_dto("test@gmail.com"))
        .await
        .unwrap();

    let logged_in = services
        .users()
        .login("test@gmail.com", "123")
        .await
        .unwrap();

    let dto = logged_in.expect("expected a logged-in user");
    assert_eq!(dto.id, created.id);
}

#[tokio::test]
async fn test_login_with_unknown_credentials_is_empty() {
    let db = test_database().await;
    let services = Services::from_connection(db.get_connection());
    services
        .users()
        .create(create_dto("test@gmail.com"))
        .await
        .unwrap();

    let result = services.users().login("dummy", "123").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_invalid_create_persists_nothing() {
    let db = test_database().await;
    let services = Services::from_connection(db.get_connection());
    let mut dto = create_dto("test@gmail.com");
    dto.role = "fake_role".to_string();

    let err = services.users().create(dto).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    let store = UserStore::new(db.get_connection());
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unpadded_birthday_is_rejected_before_persistence() {
    let db = test_database().await;
    let services = Services::from_connection(db.get_connection());
    let mut dto = create_dto("test@gmail.com");
    dto.birthday = "2000-1-1".to_string();

    let err = services.users().create(dto).await.unwrap_err();

    match err {
        AppError::Validation(errors) => assert!(errors.contains_code("invalid.birthday")),
        other => panic!("expected validation error, got {:?}", other),
    }
    let store = UserStore::new(db.get_connection());
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_database_ping() {
    let db = test_database().await;

    assert!(db.ping().await.is_ok());
}

#[tokio::test]
async fn test_connect_without_migrations() {
    let config = user_registry::Config::with_database_url("sqlite::memory:");

    let db = Database::connect_without_migrations(&config).await.unwrap();

    assert!(db.ping().await.is_ok());
}
