pub mod eps;
pub mod health;
pub mod molecules;
pub mod organizations;
