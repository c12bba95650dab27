//! Library crate for lsr.
//!
//! The shipped application is the `lsr` binary (`src/main.rs`).
//!
//! The library holds the listing pipeline so the binary and the integration tests share it:
//! [core] collects, sorts and renders, [config] resolves what to list, [app] runs one listing.

pub mod app;
pub mod config;
pub mod core;
pub mod utils;
