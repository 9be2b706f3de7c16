//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words4.rs"));
include!(concat!(env!("OUT_DIR"), "/words5.rs"));
include!(concat!(env!("OUT_DIR"), "/words6.rs"));
