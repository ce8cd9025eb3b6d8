pub mod pattern_expander;
pub mod predicate;
pub mod search_plan;
pub mod search_query;
pub mod sort_resolver;
pub mod sql;

pub use pattern_expander::PatternSet;
pub use predicate::{EntityKind, Predicate};
pub use search_plan::SearchPlan;
pub use search_query::{SearchParams, SearchQuery, SearchType};
pub use sort_resolver::SortOrder;
pub use sql::{Dialect, SqlFragment, SqlParam, Statement};
