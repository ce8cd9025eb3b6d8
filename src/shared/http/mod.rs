pub mod middleware;
pub mod request;
pub mod response;

pub use middleware::{guard, AccessPolicy};
pub use request::parse_json;
pub use response::{cache_control, error_body, json, raw_json, Acknowledgement, X_CACHE};
