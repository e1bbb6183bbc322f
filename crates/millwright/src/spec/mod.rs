//! Specification data model: field domains and the spec structs.

mod table_spec;
mod types;

pub use table_spec::{PartialTableSpec, TableSpec};
pub use types::{Construction, EdgeFinish, LegMaterial, LegProfile, TopMaterial, TopShape};
