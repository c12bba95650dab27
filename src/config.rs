//! Configuration for lsr.
//!
//! - [load]: reading `lsr.toml` into a [Config].
//! - [general]: the `[general]` table with the listing defaults.
//! - [listing]: the immutable [ListingConfiguration] of one invocation.

pub mod general;
pub mod listing;
pub mod load;

pub use general::General;
pub use listing::{ListingBuilder, ListingConfiguration};
pub use load::{Config, RawConfig};
