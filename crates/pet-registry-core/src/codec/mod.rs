//! CSV import and export for the pet registry.
//!
//! Both directions are pure functions over in-memory text. Import is
//! deliberately forgiving: malformed rows are counted and dropped, and
//! missing or unreadable values fall back to field defaults.

mod export;
mod fields;
mod import;
mod split;

pub use export::*;
pub use fields::*;
pub use import::*;
pub use split::*;
