use std::collections::{BTreeMap, HashSet};

use vending_core::{LaneCode, VendingError, VendingResult};

use crate::popularity;
use crate::product::VendingMachineProduct;
use crate::record::ProductRecord;
use crate::registry::ProductRegistry;
use crate::snapshot::MachineSnapshot;

/// In-memory product registry of one vending machine.
///
/// Owns at most one [`ProductRecord`] per lane. Records are created by
/// registration, changed only by stocking and selling, and dropped on
/// unregistration.
#[derive(Debug, Clone, Default)]
pub struct VendingMachine {
    lanes: BTreeMap<LaneCode, ProductRecord>,
    next_registration: u64,
}

impl VendingMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn number_of_lanes(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_registered(&self, lane: &str) -> bool {
        self.record(lane).is_ok()
    }

    pub fn record(&self, lane: &str) -> VendingResult<&ProductRecord> {
        let code = parse_lane(lane)?;
        self.lanes
            .get(&code)
            .ok_or_else(|| VendingError::not_registered(lane))
    }

    /// Records in lane order.
    pub fn records(&self) -> impl Iterator<Item = &ProductRecord> {
        self.lanes.values()
    }

    /// Items sold across every lane.
    pub fn total_number_of_sales(&self) -> u64 {
        self.lanes.values().map(|r| u64::from(r.sale_count())).sum()
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot::capture(self)
    }

    fn record_mut(&mut self, lane: &str) -> VendingResult<&mut ProductRecord> {
        let code = parse_lane(lane)?;
        self.lanes
            .get_mut(&code)
            .ok_or_else(|| VendingError::not_registered(lane))
    }
}

fn parse_lane(lane: &str) -> VendingResult<LaneCode> {
    lane.parse().map_err(|_| VendingError::not_registered(lane))
}

impl ProductRegistry for VendingMachine {
    fn register_product(&mut self, product: &VendingMachineProduct) -> VendingResult<()> {
        let lane = product.lane_code();
        if self.lanes.contains_key(lane) {
            tracing::warn!(lane = %lane, description = product.description(), "lane already in use");
            return Err(VendingError::lane_in_use(lane));
        }

        let registration = self.next_registration;
        self.next_registration += 1;
        self.lanes.insert(
            lane.clone(),
            ProductRecord::registered(product.clone(), registration),
        );

        tracing::debug!(lane = %lane, description = product.description(), "product registered");
        Ok(())
    }

    fn unregister_product(&mut self, product: &VendingMachineProduct) -> VendingResult<ProductRecord> {
        let lane = product.lane_code();
        let record = self
            .lanes
            .remove(lane)
            .ok_or_else(|| VendingError::not_registered(lane.as_str()))?;

        tracing::debug!(
            lane = %lane,
            item_count = record.item_count(),
            sale_count = record.sale_count(),
            "product unregistered"
        );
        Ok(record)
    }

    fn add_item(&mut self, lane: &str) -> VendingResult<()> {
        let record = self.record_mut(lane)?;
        record.add_item();

        tracing::debug!(lane = %record.lane_code(), item_count = record.item_count(), "item added");
        Ok(())
    }

    fn buy_item(&mut self, lane: &str) -> VendingResult<()> {
        let record = self.record_mut(lane)?;
        if let Err(err) = record.buy_item() {
            tracing::warn!(lane = %record.lane_code(), "product unavailable");
            return Err(err);
        }

        tracing::debug!(
            lane = %record.lane_code(),
            item_count = record.item_count(),
            sale_count = record.sale_count(),
            "item sold"
        );
        Ok(())
    }

    fn number_of_products(&self) -> usize {
        self.lanes
            .values()
            .map(ProductRecord::description)
            .collect::<HashSet<_>>()
            .len()
    }

    fn number_of_items(&self, lane: &str) -> VendingResult<u32> {
        self.record(lane).map(ProductRecord::item_count)
    }

    fn number_of_sales(&self, lane: &str) -> VendingResult<u32> {
        self.record(lane).map(ProductRecord::sale_count)
    }

    fn total_number_of_items(&self) -> u64 {
        self.lanes.values().map(|r| u64::from(r.item_count())).sum()
    }

    fn most_popular(&self) -> VendingResult<Option<&ProductRecord>> {
        if self.lanes.is_empty() {
            return Err(VendingError::no_products());
        }
        Ok(popularity::most_popular(self.lanes.values()))
    }
}
