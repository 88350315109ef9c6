//! Request validation for user creation.
//!
//! Checks are independent and non-short-circuiting: every applicable
//! check runs and its error is accumulated, so a caller gets the full
//! picture of what is wrong with the request in one pass.

use crate::domain::user::{parse_birthday, CreateUserDto, Gender, Role};
use crate::errors::{FieldError, ValidationErrors};

/// Accumulator of zero or more coded field errors for one validation pass.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field error. Errors keep their insertion order.
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// True iff at least one error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors::new(self.errors)
    }
}

/// Validates `CreateUserDto` fields before mapping and persistence.
///
/// Stateless; constructed explicitly and injected into the service.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateUserValidator;

impl CreateUserValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run all checks against the DTO. No side effects.
    pub fn validate(&self, dto: &CreateUserDto) -> ValidationResult {
        let mut result = ValidationResult::new();

        if dto.name.trim().is_empty() {
            result.add(FieldError::new("invalid.name", "name must not be blank"));
        }
        if dto.email.trim().is_empty() {
            result.add(FieldError::new("invalid.email", "email must not be blank"));
        }
        if dto.password.is_empty() {
            result.add(FieldError::new(
                "invalid.password",
                "password must not be blank",
            ));
        }
        // Rejects anything that is not a canonical bare ISO date,
        // including date+time input and unpadded day/month numbers.
        if parse_birthday(&dto.birthday).is_none() {
            result.add(FieldError::new(
                "invalid.birthday",
                "birthday must be a date in YYYY-MM-DD format",
            ));
        }
        if dto.role.parse::<Role>().is_err() {
            result.add(FieldError::new("invalid.role", "role is not recognized"));
        }
        if dto.gender.parse::<Gender>().is_err() {
            result.add(FieldError::new(
                "invalid.gender",
                "gender is not recognized",
            ));
        }

        result
    }
}
