//! Conversions from external infrastructure errors into domain errors.

use hireflow_domain::HireflowError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub HireflowError);

impl From<InfraError> for HireflowError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<HireflowError> for InfraError {
    fn from(value: HireflowError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoHireflowError {
    fn into_hireflow(self) -> HireflowError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → HireflowError */
/* -------------------------------------------------------------------------- */

impl IntoHireflowError for SqlError {
    fn into_hireflow(self) -> HireflowError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        HireflowError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        HireflowError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        HireflowError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        HireflowError::Database("foreign key constraint violation".into())
                    }
                    _ => HireflowError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => HireflowError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                HireflowError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                HireflowError::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => HireflowError::Database("invalid UTF-8 returned from sqlite".into()),
            RE::InvalidParameterName(parameter_name) => {
                HireflowError::Database(format!("invalid parameter name: {parameter_name}"))
            }
            RE::InvalidPath(path) => {
                HireflowError::Database(format!("invalid database path: {}", path.to_string_lossy()))
            }
            RE::InvalidQuery => HireflowError::Database("invalid SQL query".into()),
            other => HireflowError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_hireflow())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → HireflowError */
/* -------------------------------------------------------------------------- */

impl IntoHireflowError for r2d2::Error {
    fn into_hireflow(self) -> HireflowError {
        HireflowError::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_hireflow())
    }
}
