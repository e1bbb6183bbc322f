//! Command implementations.

pub mod constraints;
pub mod price;
pub mod validate;
