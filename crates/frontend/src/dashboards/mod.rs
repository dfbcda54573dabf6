pub mod d400_order_summary;

pub use d400_order_summary::ui::OrderSummaryDashboard;
