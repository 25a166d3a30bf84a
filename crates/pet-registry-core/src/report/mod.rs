//! Read-side views over classified records: table filtering and the
//! dashboard summary.

mod filter;
mod summary;

pub use filter::*;
pub use summary::*;
