use crate::domain::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";
const UNDEFINED_TABLE: &str = "42P01";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                if constraint.ends_with("_pkey") {
                    return DomainError::Conflict("article already exists".into());
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    UNIQUE_VIOLATION => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    UNDEFINED_TABLE => {
                        return DomainError::Persistence(format!(
                            "article table missing: {}",
                            db_err.message()
                        ));
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
