//! User domain entity and related types.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{BIRTHDAY_FORMAT, GENDER_FEMALE, GENDER_MALE, ROLE_ADMIN, ROLE_USER};
use crate::errors::{AppError, AppResult};

/// Parse a birthday string, accepting only the canonical zero-padded
/// `YYYY-MM-DD` form. chrono's `%Y-%m-%d` alone also accepts unpadded
/// numerics like `2000-1-1`, which the create contract rejects.
pub(crate) fn parse_birthday(input: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(input, BIRTHDAY_FORMAT).ok()?;
    if parsed.format(BIRTHDAY_FORMAT).to_string() == input {
        Some(parsed)
    } else {
        None
    }
}

/// Error produced when a role string matches no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Canonical name of the role, as stored and matched during validation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => ROLE_USER,
            Role::Admin => ROLE_ADMIN,
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Case-sensitive match against the canonical role names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_USER => Ok(Role::User),
            ROLE_ADMIN => Ok(Role::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error produced when a gender string matches no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender: {0}")]
pub struct ParseGenderError(pub String);

/// User genders enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Canonical name of the gender, as stored and matched during validation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => GENDER_MALE,
            Gender::Female => GENDER_FEMALE,
        }
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    /// Case-sensitive match against the canonical gender names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GENDER_MALE => Ok(Gender::Male),
            GENDER_FEMALE => Ok(Gender::Female),
            other => Err(ParseGenderError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User domain entity
///
/// The identity is assigned by the store on save and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub birthday: NaiveDate,
    pub role: Role,
    pub gender: Gender,
}

/// A user that has not been persisted yet (no identity assigned).
///
/// Produced by the create mapper, consumed by `UserRepository::save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birthday: NaiveDate,
    pub role: Role,
    pub gender: Gender,
}

impl NewUser {
    /// Attach the identity assigned by the store.
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            birthday: self.birthday,
            role: self.role,
            gender: self.gender,
        }
    }
}

/// User creation data transfer object.
///
/// Carries raw request input; lives only for the duration of a create
/// request and is checked by `CreateUserValidator` before mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserDto {
    /// User display name
    pub name: String,
    /// User email address, used as the login key
    pub email: String,
    /// User password
    pub password: String,
    /// Birthday in `YYYY-MM-DD` format
    pub birthday: String,
    /// Role name, must match a `Role` variant
    pub role: String,
    /// Gender name, must match a `Gender` variant
    pub gender: String,
}

/// Create mapper: validated DTO -> unpersisted entity.
///
/// Assumes the DTO already passed validation; a parse failure here is a
/// contract violation and surfaces as an internal error, not a user error.
impl TryFrom<CreateUserDto> for NewUser {
    type Error = AppError;

    fn try_from(dto: CreateUserDto) -> AppResult<Self> {
        let birthday = parse_birthday(&dto.birthday).ok_or_else(|| {
            AppError::internal(format!(
                "unvalidated birthday reached mapping: {:?}",
                dto.birthday
            ))
        })?;
        let role = dto
            .role
            .parse::<Role>()
            .map_err(|e| AppError::internal(format!("unvalidated role reached mapping: {}", e)))?;
        let gender = dto
            .gender
            .parse::<Gender>()
            .map_err(|e| AppError::internal(format!("unvalidated gender reached mapping: {}", e)))?;

        Ok(NewUser {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            birthday,
            role,
            gender,
        })
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    /// Unique user identifier
    pub id: i32,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
    /// User role
    pub role: Role,
    /// Parsed birthday
    pub birthday: NaiveDate,
    /// User gender
    pub gender: Gender,
}

/// Read mapper: entity -> response representation. Never carries the password.
impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            birthday: user.birthday,
            gender: user.gender,
        }
    }
}
