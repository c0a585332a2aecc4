use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    #[error("Record rejected: {0}")]
    Rejected(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return DbError::Duplicate(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
                return DbError::Rejected(db_err.message().to_string());
            }
        }
        DbError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_pass_through() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_display() {
        let err = DbError::Duplicate("employees_username_key".to_string());
        assert_eq!(err.to_string(), "Duplicate record: employees_username_key");
    }
}
