//! Services layer - Application use cases and business logic.

pub mod container;
pub mod user_service;

pub use container::{ServiceContainer, Services};
pub use user_service::{UserManager, UserService};
