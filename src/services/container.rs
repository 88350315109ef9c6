//! Service container - composition root for the application.
//!
//! All collaborators are constructed here and injected explicitly;
//! there is no ambient global state or singleton access.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{UserManager, UserService};
use crate::domain::CreateUserValidator;
use crate::infra::UserStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a new service container with pre-built services
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Wire the full service graph from a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let repo = Arc::new(UserStore::new(db));
        let user_service = Arc::new(UserManager::new(CreateUserValidator::new(), repo));

        Self { user_service }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
