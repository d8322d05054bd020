//! `vending-core` — domain building blocks for the vending machine registry.
//!
//! This crate contains **pure domain** primitives (no IO, no locking, no logging).

pub mod error;
pub mod lane;
pub mod value_object;

pub use error::{VendingError, VendingResult};
pub use lane::LaneCode;
pub use value_object::ValueObject;
