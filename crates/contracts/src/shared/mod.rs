pub mod paging;

pub use paging::{ListQuery, ListResponse};
