//! Descriptive tournament reports.
//!
//! Display-only statistics about a single tournament's field. These do not
//! feed into recommendation scores.

mod comparison;
mod diversity;

pub use comparison::*;
pub use diversity::*;
