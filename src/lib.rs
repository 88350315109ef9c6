//! user-registry - User registration and authentication over a relational store.
//!
//! This crate provides the user-management core of a web application:
//! request validation, DTO/entity mapping, a repository abstraction over
//! SeaORM, and a service layer orchestrating the create/login flows.
//! Transport concerns (HTTP, CLI) are intentionally left to the caller.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities, DTOs, and validation
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **errors**: Centralized error handling

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{CreateUserDto, Gender, NewUser, Role, User, UserDto};
pub use errors::{AppError, AppResult};
pub use infra::Database;
pub use services::{ServiceContainer, Services, UserService};
