//! Repair engine producing minimally-altered valid alternatives.

mod repair;

pub use repair::{RepairConfig, RepairEngine};
