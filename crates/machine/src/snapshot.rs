use serde::{Deserialize, Serialize};

use vending_core::LaneCode;

use crate::machine::VendingMachine;
use crate::record::ProductRecord;
use crate::registry::ProductRegistry;

/// Point-in-time view of a machine: every record in lane order plus the
/// aggregate figures, taken from one consistent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub lanes: Vec<ProductRecord>,
    pub number_of_products: usize,
    pub total_number_of_items: u64,
    pub total_number_of_sales: u64,
    pub most_popular: Option<LaneCode>,
}

impl MachineSnapshot {
    pub fn capture(machine: &VendingMachine) -> Self {
        Self {
            lanes: machine.records().cloned().collect(),
            number_of_products: machine.number_of_products(),
            total_number_of_items: machine.total_number_of_items(),
            total_number_of_sales: machine.total_number_of_sales(),
            most_popular: machine
                .most_popular()
                .ok()
                .flatten()
                .map(|r| r.lane_code().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::VendingMachineProduct;

    #[test]
    fn empty_machine_snapshot() {
        let snapshot = VendingMachine::new().snapshot();
        assert!(snapshot.lanes.is_empty());
        assert_eq!(snapshot.number_of_products, 0);
        assert_eq!(snapshot.total_number_of_items, 0);
        assert_eq!(snapshot.most_popular, None);
    }

    #[test]
    fn snapshot_lists_lanes_in_order_and_serializes() {
        let mut machine = VendingMachine::new();
        for (lane, description) in [("B1", "Irn Bru"), ("A1", "Haggis Crisps")] {
            machine
                .register_product(&VendingMachineProduct::parse(lane, description).unwrap())
                .unwrap();
            machine.add_item(lane).unwrap();
        }
        machine.buy_item("B1").unwrap();

        let snapshot = machine.snapshot();
        let lanes: Vec<&str> = snapshot.lanes.iter().map(|r| r.lane_code().as_str()).collect();
        assert_eq!(lanes, ["A1", "B1"]);
        assert_eq!(snapshot.total_number_of_items, 1);
        assert_eq!(snapshot.total_number_of_sales, 1);
        assert_eq!(snapshot.most_popular, Some("B1".parse().unwrap()));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["most_popular"], "B1");
        assert_eq!(json["lanes"][1]["sale_count"], 1);
    }
}
