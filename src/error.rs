use crate::dashboard::Action;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// SQLite primary result code for "unable to open database file".
const SQLITE_CANTOPEN: i32 = 14;

#[derive(Debug, ThisError)]
pub enum StockroomError {
    #[error("Cannot reach database: {0}")]
    Connection(#[source] SqlxError),

    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Invalid {field}: {input:?}")]
    Parse { field: &'static str, input: String },

    #[error("{0} is not available for this role")]
    Forbidden(Action),

    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StockroomError {
    pub fn parse(field: &'static str, input: impl Into<String>) -> Self {
        Self::Parse {
            field,
            input: input.into(),
        }
    }

    /// True for failures caused by the database being unreachable rather than
    /// by the statement itself.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<SqlxError> for StockroomError {
    fn from(e: SqlxError) -> Self {
        let unreachable = match &e {
            SqlxError::Configuration(_)
            | SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed => true,
            SqlxError::Database(db) => db
                .code()
                .and_then(|c| c.parse::<i32>().ok())
                .is_some_and(|c| (c & 0xff) == SQLITE_CANTOPEN),
            _ => false,
        };
        if unreachable {
            StockroomError::Connection(e)
        } else {
            StockroomError::Database(e)
        }
    }
}

impl From<figment::Error> for StockroomError {
    fn from(e: figment::Error) -> Self {
        StockroomError::Config(Box::new(e))
    }
}
