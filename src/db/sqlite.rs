use crate::config::Config;
use crate::db::models::{AccessRequest, DeleteOutcome, NewResource, Resource};
use crate::db::schema::{REQUEST_TIME_FORMAT, SQLITE_INIT};
use crate::error::StockroomError;
use chrono::NaiveDateTime;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Connection handle shared by the resource store and the request log.
///
/// The pool holds a single connection; every statement acquires it and hands
/// it back before the call returns, error or not.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect using the configured URL and make sure both tables exist.
    pub async fn open(cfg: &Config) -> Result<Self, StockroomError> {
        cfg.validate()?;
        let connect_opts = SqliteConnectOptions::from_str(cfg.database_url.as_str())?
            .create_if_missing(cfg.create_if_missing);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(cfg.acquire_timeout())
            .connect_with(connect_opts)
            .await?;
        let db = Self::new(pool);
        db.init_schema().await?;
        debug!(database_url = %cfg.database_url, "database ready");
        Ok(db)
    }

    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), StockroomError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub fn resources(&self) -> ResourceStore {
        ResourceStore {
            pool: self.pool.clone(),
        }
    }

    pub fn requests(&self) -> AccessRequestLog {
        AccessRequestLog {
            pool: self.pool.clone(),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[derive(Clone)]
pub struct ResourceStore {
    pool: SqlitePool,
}

impl ResourceStore {
    /// All rows in the table's natural scan order.
    pub async fn list_all(&self) -> Result<Vec<Resource>, StockroomError> {
        let rows = sqlx::query_as::<_, Resource>("SELECT * FROM resource")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert one row and return its database-assigned id.
    pub async fn insert(&self, resource: &NewResource) -> Result<i64, StockroomError> {
        let result = sqlx::query(
            "INSERT INTO resource (resource_name, timeline, quantity, cost) VALUES (?, ?, ?, ?)",
        )
        .bind(&resource.name)
        .bind(&resource.timeline)
        .bind(resource.quantity)
        .bind(resource.cost)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<DeleteOutcome, StockroomError> {
        let result = sqlx::query("DELETE FROM resource WHERE resource_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(if result.rows_affected() > 0 {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        })
    }
}

#[derive(Clone)]
pub struct AccessRequestLog {
    pool: SqlitePool,
}

impl AccessRequestLog {
    /// Append a request; the timestamp comes from the column default.
    pub async fn submit(&self, username: &str) -> Result<(), StockroomError> {
        sqlx::query("INSERT INTO access_requests (username) VALUES (?)")
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Most recent first. Rows sharing a timestamp fall back to insertion order.
    pub async fn list_requests(&self) -> Result<Vec<AccessRequest>, StockroomError> {
        let rows = sqlx::query(
            "SELECT username, request_time FROM access_requests ORDER BY request_time DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    fn row_to_model(row: SqliteRow) -> Result<AccessRequest, StockroomError> {
        let username: String = row.try_get("username")?;
        let time_str: String = row.try_get("request_time")?;
        let requested_at = NaiveDateTime::parse_from_str(&time_str, REQUEST_TIME_FORMAT)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(AccessRequest {
            username,
            requested_at,
        })
    }
}
