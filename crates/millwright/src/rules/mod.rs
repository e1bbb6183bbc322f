//! Static rule configuration shared by checkers and the constraint calculator.

mod tables;

pub use tables::{
    DEFAULT_TABLES, MaterialRule, MetalProfileRule, PedestalTier, RuleTables, SpanTier,
};
