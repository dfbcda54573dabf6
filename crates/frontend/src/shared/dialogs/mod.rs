pub mod alert;

pub use alert::alert;
