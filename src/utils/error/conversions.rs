//! Conversions from storage failures into service errors

use super::types::ServiceError;
use sea_orm::{DbErr, SqlErr};
use tracing::debug;

/// Map a failed write, turning a unique-constraint rejection from the store
/// into a `Conflict` carrying `message`.
pub fn map_write_error<F>(err: DbErr, message: F) -> ServiceError
where
    F: FnOnce() -> String,
{
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            debug!("Unique constraint rejected write: {}", detail);
            ServiceError::Conflict(message())
        }
        _ => ServiceError::Database(err),
    }
}
