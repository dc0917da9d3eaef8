use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store accepted the write but nothing was modified.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Turns a unique violation into a `ConstraintViolation` carrying `message`,
    /// leaving every other error untouched.
    pub fn on_unique_violation(self, message: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }

    /// Turns a foreign key violation into `NotFound`: the referenced row is gone.
    pub fn on_foreign_key_violation(self) -> Self {
        if self.is_foreign_key_violation() {
            StorageError::NotFound
        } else {
            self
        }
    }
}
