use vending_core::VendingResult;

use crate::product::VendingMachineProduct;
use crate::record::ProductRecord;

/// Operations of a vending machine's product registry.
///
/// Lane arguments are raw lane text (`"A1"`, `"a1"`); a lane that cannot be
/// parsed can never be registered and is reported as `LaneNotRegistered`.
pub trait ProductRegistry {
    /// Register `product` in its lane with zero items and sales.
    ///
    /// Fails with `LaneInUse` if the lane already holds a product, whatever its
    /// description.
    fn register_product(&mut self, product: &VendingMachineProduct) -> VendingResult<()>;

    /// Remove the record for the product's lane and return it.
    fn unregister_product(&mut self, product: &VendingMachineProduct) -> VendingResult<ProductRecord>;

    /// Stock one more item in `lane`.
    fn add_item(&mut self, lane: &str) -> VendingResult<()>;

    /// Sell one item from `lane`.
    ///
    /// `LaneNotRegistered` takes precedence over `ProductUnavailable`.
    fn buy_item(&mut self, lane: &str) -> VendingResult<()>;

    /// Number of distinct product descriptions (not lanes).
    fn number_of_products(&self) -> usize;

    fn number_of_items(&self, lane: &str) -> VendingResult<u32>;

    fn number_of_sales(&self, lane: &str) -> VendingResult<u32>;

    /// Items stocked across every lane.
    fn total_number_of_items(&self) -> u64;

    /// The best-selling record, `None` if nothing has sold yet.
    ///
    /// Fails with `LaneNotRegistered` when no product is registered at all.
    fn most_popular(&self) -> VendingResult<Option<&ProductRecord>>;
}
