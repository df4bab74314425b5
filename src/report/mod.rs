//! Report rendering
//!
//! Turns measurements into the fixed-width profiling table.

pub mod format;
pub mod layout;
pub mod printer;

pub use format::{crop_path, group_thousands};
pub use layout::{pad, Align};
pub use printer::Reporter;
