use serde::{Deserialize, Serialize};

use vending_core::{LaneCode, VendingError, VendingResult};

use crate::product::VendingMachineProduct;

/// A registered product plus its live counters.
///
/// `item_count` is the stock currently in the lane; `sale_count` is the number of
/// items ever sold from it. Both start at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    product: VendingMachineProduct,
    item_count: u32,
    sale_count: u32,
    #[serde(skip)]
    registration: u64,
}

impl ProductRecord {
    pub fn new(product: VendingMachineProduct) -> Self {
        Self {
            product,
            item_count: 0,
            sale_count: 0,
            registration: 0,
        }
    }

    pub(crate) fn registered(product: VendingMachineProduct, registration: u64) -> Self {
        Self {
            registration,
            ..Self::new(product)
        }
    }

    pub fn product(&self) -> &VendingMachineProduct {
        &self.product
    }

    pub fn lane_code(&self) -> &LaneCode {
        self.product.lane_code()
    }

    pub fn description(&self) -> &str {
        self.product.description()
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn sale_count(&self) -> u32 {
        self.sale_count
    }

    /// Order in which the record was registered (earlier is lower).
    pub fn registration(&self) -> u64 {
        self.registration
    }

    pub(crate) fn add_item(&mut self) {
        self.item_count = self.item_count.saturating_add(1);
    }

    /// Move one item from stock to sales. Neither counter changes on failure.
    pub(crate) fn buy_item(&mut self) -> VendingResult<()> {
        if self.item_count == 0 {
            return Err(VendingError::unavailable(self.lane_code()));
        }
        self.item_count -= 1;
        self.sale_count = self.sale_count.saturating_add(1);
        Ok(())
    }
}
