//! Domain error model.

use thiserror::Error;

use crate::lane::LaneCode;

/// Result type used across the vending domain.
pub type VendingResult<T> = Result<T, VendingError>;

/// Lane text reported when a query needs at least one registered lane and the
/// machine has none.
pub const NO_LANES: &str = "<none>";

/// Vending-level error.
///
/// Every variant is a precondition failure surfaced to the caller; none of them
/// leave the machine in a partially updated state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VendingError {
    /// Registration targeted a lane that already holds a product.
    #[error("lane {0} is already in use")]
    LaneInUse(LaneCode),

    /// The referenced lane has no registered product.
    #[error("lane {0} is not registered")]
    LaneNotRegistered(String),

    /// A purchase was attempted on a lane with no stocked items.
    #[error("product in lane {0} is unavailable")]
    ProductUnavailable(LaneCode),

    /// Lane code failed the letter + digit format rule.
    #[error("invalid lane code: {0:?}")]
    InvalidLaneCode(String),

    /// A shared machine's lock was poisoned by a panicking writer.
    #[error("vending machine lock poisoned")]
    LockPoisoned,
}

impl VendingError {
    pub fn lane_in_use(lane: &LaneCode) -> Self {
        Self::LaneInUse(lane.clone())
    }

    pub fn not_registered(lane: impl Into<String>) -> Self {
        Self::LaneNotRegistered(lane.into())
    }

    pub fn unavailable(lane: &LaneCode) -> Self {
        Self::ProductUnavailable(lane.clone())
    }

    pub fn invalid_lane(raw: impl Into<String>) -> Self {
        Self::InvalidLaneCode(raw.into())
    }

    /// `LaneNotRegistered` for queries that need at least one registered lane.
    pub fn no_products() -> Self {
        Self::LaneNotRegistered(NO_LANES.to_string())
    }

    pub fn is_not_registered(&self) -> bool {
        matches!(self, Self::LaneNotRegistered(_))
    }
}
