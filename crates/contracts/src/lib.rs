//! Shared types for the Ecoleta client
//!
//! Everything here is free of browser APIs so it can be unit tested natively
//! and reused by any other consumer of the item/point API.

pub mod domain;
pub mod shared;
