pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod service;
pub mod shell;
pub mod types;
pub mod ui;

pub use config::Config;
pub use dashboard::{Action, Dashboard};
pub use db::Database;
pub use error::StockroomError;
pub use shell::{Shell, ShellState};
