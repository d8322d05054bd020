//! Construction of products, records and machines from raw input.

use crate::machine::VendingMachine;
use crate::product::VendingMachineProduct;
use crate::record::ProductRecord;

/// Builds vending domain objects from unvalidated input.
///
/// Malformed lane codes produce no product rather than an error; use
/// [`VendingMachineProduct::parse`] when the rejection reason matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct VendingFactory;

impl VendingFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn make_vending_machine_product(
        &self,
        lane_code: &str,
        description: &str,
    ) -> Option<VendingMachineProduct> {
        match VendingMachineProduct::parse(lane_code, description) {
            Ok(product) => Some(product),
            Err(err) => {
                tracing::debug!(lane_code, error = %err, "product rejected");
                None
            }
        }
    }

    pub fn make_product_record(&self, product: VendingMachineProduct) -> ProductRecord {
        ProductRecord::new(product)
    }

    pub fn make_vending_machine(&self) -> VendingMachine {
        VendingMachine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn makes_products_only_for_valid_lanes() {
        let factory = VendingFactory::new();
        assert!(factory.make_vending_machine_product("a1", "Haggis Crisps").is_some());
        assert!(factory.make_vending_machine_product("Z0", "Haggis Crisps").is_some());
        assert!(factory.make_vending_machine_product("A!", "Haggis Crisps").is_none());
        assert!(factory.make_vending_machine_product("", "Haggis Crisps").is_none());
    }

    #[test]
    fn made_record_and_machine_start_empty() {
        let factory = VendingFactory::new();
        let product = factory
            .make_vending_machine_product("A1", "Haggis Crisps")
            .unwrap();
        let record = factory.make_product_record(product.clone());
        assert_eq!(record.product(), &product);
        assert_eq!(record.item_count(), 0);
        assert!(factory.make_vending_machine().is_empty());
    }
}
