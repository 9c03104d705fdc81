pub mod errors;

pub use errors::{ErrorBody, ServiceError, ServiceResult};
