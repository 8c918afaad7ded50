//! swasthya-medicines
//!
//! Medicine directory with case-insensitive search and generic
//! substitution: which non-branded medicine shares a branded one's active
//! ingredient, and what switching saves.

pub mod directory;
pub mod pricing;

pub use directory::{find_medicine, medicines, search};
pub use pricing::{generic_alternative, savings};
