pub mod config;
pub mod db_ops;

pub use config::DbConfig;
pub use db_ops::{DatabaseHealth, DbManager, initialize_database};
