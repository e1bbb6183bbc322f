//! Material price lookup; a file-reading utility outside the rule engine.

mod loader;

pub use loader::{PriceList, PriceRow, PriceSourceMetadata};
