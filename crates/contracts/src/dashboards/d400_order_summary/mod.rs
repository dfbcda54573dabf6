pub mod dto;

pub use dto::{DailySales, OrderMetrics};
