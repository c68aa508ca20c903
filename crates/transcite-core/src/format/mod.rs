//! Style formatters
//!
//! One module per output style plus the shared name/punctuation helpers.
//! Formatters are pure: they never fail and never log.

pub mod apa;
pub mod apa7;
pub mod chicago;
pub mod ieee;
pub mod mla;
pub mod shared;
pub mod vancouver;

pub use apa::format_apa;
pub use apa7::format_apa7;
pub use chicago::format_chicago;
pub use ieee::format_ieee;
pub use mla::format_mla;
pub use vancouver::format_vancouver;
