use shared::EntityId;

use super::validation::ValidationError;

/// Errors surfaced by the domain services
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: EntityId },
    #[error("Not signed in")]
    NotAuthenticated,
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: EntityId) -> Self {
        DomainError::NotFound { entity, id }
    }
}
