use serde::{Deserialize, Serialize};

use vending_core::{LaneCode, ValueObject, VendingResult};

/// A product identity: what is sold, and from which lane.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendingMachineProduct {
    lane_code: LaneCode,
    description: String,
}

impl VendingMachineProduct {
    pub fn new(lane_code: LaneCode, description: impl Into<String>) -> Self {
        Self {
            lane_code,
            description: description.into(),
        }
    }

    /// Build a product from a raw lane code, reporting why it was rejected.
    pub fn parse(lane_code: &str, description: impl Into<String>) -> VendingResult<Self> {
        Ok(Self::new(lane_code.parse()?, description))
    }

    pub fn lane_code(&self) -> &LaneCode {
        &self.lane_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ValueObject for VendingMachineProduct {}

impl core::fmt::Display for VendingMachineProduct {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.description, self.lane_code)
    }
}
