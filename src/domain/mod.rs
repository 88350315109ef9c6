//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod user;
pub mod validator;

pub use user::{CreateUserDto, Gender, NewUser, Role, User, UserDto};
pub use validator::{CreateUserValidator, ValidationResult};
