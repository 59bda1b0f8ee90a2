//! Input/output helpers.
//!
//! - boundary parsing of sampling inputs (`input`)
//! - per-sample CSV export (`export`)
//! - curve JSON read/write (`curve`)

pub mod curve;
pub mod export;
pub mod input;

pub use curve::*;
pub use export::*;
pub use input::*;
