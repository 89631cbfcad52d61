use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A record points at another record that no longer resolves.
    #[error("{referenced_by} {referrer_id} references missing {entity} with id {id}")]
    DanglingReference {
        entity: &'static str,
        id: DbId,
        referenced_by: &'static str,
        referrer_id: DbId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
