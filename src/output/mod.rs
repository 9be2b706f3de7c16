//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_board, print_breakdown, print_generated, print_status};
