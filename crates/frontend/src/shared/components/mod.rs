pub mod bar_chart;
pub mod confirm_dialog;
pub mod pagination_controls;
pub mod stat_card;

pub use bar_chart::BarChart;
pub use confirm_dialog::ConfirmDialog;
pub use pagination_controls::PaginationControls;
pub use stat_card::{CardTone, StatCard};
