pub mod anime;
pub mod bulk;
pub mod episodes;
pub mod search;
