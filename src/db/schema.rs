//! SQL DDL for the inventory database (SQLite dialect).

/// - `resource_id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids are never reused
/// - `request_time` defaults to UTC now with millisecond precision
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS resource (
    resource_id INTEGER PRIMARY KEY AUTOINCREMENT,
    resource_name TEXT NOT NULL,
    timeline TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    cost REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS access_requests (
    username TEXT NOT NULL,
    request_time TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_access_requests_time ON access_requests(request_time);
"#;

/// Format of `request_time` as written by the column default.
pub const REQUEST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
