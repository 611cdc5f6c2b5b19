#![allow(dead_code)]

use stockroom::dashboard::Dashboard;
use stockroom::types::{Role, Session};
use stockroom::{Config, Database};
use tempfile::TempDir;

/// A database living in its own temp directory; removed on drop.
pub struct TestDb {
    pub db: Database,
    _dir: TempDir,
}

pub async fn open_temp() -> TestDb {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("stockroom.sqlite");
    let cfg = Config {
        database_url: format!("sqlite:{}", path.display()),
        ..Config::default()
    };
    let db = Database::open(&cfg).await.expect("failed to open database");
    TestDb { db, _dir: dir }
}

pub fn admin(db: &Database) -> Dashboard {
    Dashboard::new(Session::new("root", Role::Admin), db, false)
}

pub fn user(db: &Database, name: &str, quiet: bool) -> Dashboard {
    Dashboard::new(Session::new(name, Role::StandardUser), db, quiet)
}
