pub mod logger;
pub mod rate_limiter;
pub mod validation;

pub use logger::{LogContext, TimedOperation};
pub use rate_limiter::WriteRateLimiter;
pub use validation::Validator;
