//! Wire types shared by the back-office screens.
//!
//! Everything here mirrors the JSON exchanged with the commerce REST API;
//! no browser or network code lives in this crate.

pub mod dashboards;
pub mod domain;
pub mod shared;
