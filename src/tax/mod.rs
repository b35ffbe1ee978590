pub mod progressive;

pub use progressive::{calculate_tax, TaxResult};
