pub mod db_ops;
pub mod listings;

pub use db_ops::{DatabaseHealth, DbConfig, DbManager, initialize_database};
pub use listings::{ListingStore, PgListingStore};
