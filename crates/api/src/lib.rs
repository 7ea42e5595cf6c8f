pub mod error;
pub mod routable;
pub mod segment;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use routable::{Routable, url_of};
pub use segment::UrlName;
