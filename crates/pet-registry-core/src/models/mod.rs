//! Domain models for the pet registry.

mod record;
mod status;
mod submission;

pub use record::*;
pub use status::*;
pub use submission::*;
