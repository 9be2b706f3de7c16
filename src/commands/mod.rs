//! Command implementations

pub mod generate;
pub mod simple;

pub use generate::generate_content;
pub use simple::run_simple;
