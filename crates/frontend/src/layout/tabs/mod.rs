//! Tab management module
//!
//! - `keys` - `TabKey`, the closed set of screens and their tab keys/titles
//! - `registry` - mapping `TabKey` → View (the only place screens are mounted)

pub mod keys;
pub mod registry;

pub use keys::TabKey;
pub use registry::render_tab_content;
