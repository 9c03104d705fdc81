pub mod eps;
pub mod molecules;
pub mod organizations;
pub mod query_builder;
pub mod store;
pub mod types;

pub use store::{ListingStore, PgListingStore};
pub use types::{EpsRow, OrganizationRow};
