pub mod aggregate;

pub use aggregate::{parse_price, Product, ProductForm, ProductId};
