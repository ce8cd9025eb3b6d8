// HTTP surface: shared state, route table and the static API description

pub mod docs;
pub mod registry;
pub mod state;

pub use registry::build_router;
pub use state::AppState;
