use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vending_core::{VendingError, VendingResult};

use crate::machine::VendingMachine;
use crate::product::VendingMachineProduct;
use crate::record::ProductRecord;
use crate::registry::ProductRegistry;
use crate::snapshot::MachineSnapshot;

/// Thread-safe handle to a [`VendingMachine`].
///
/// One lock guards the whole machine: mutations are serialized, and every query
/// (aggregates included) reads from a single consistent state. Clones share the
/// same machine.
#[derive(Debug, Clone, Default)]
pub struct SharedVendingMachine {
    inner: Arc<RwLock<VendingMachine>>,
}

impl SharedVendingMachine {
    pub fn new(machine: VendingMachine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(machine)),
        }
    }

    fn read(&self) -> VendingResult<RwLockReadGuard<'_, VendingMachine>> {
        self.inner.read().map_err(|_| VendingError::LockPoisoned)
    }

    fn write(&self) -> VendingResult<RwLockWriteGuard<'_, VendingMachine>> {
        self.inner.write().map_err(|_| VendingError::LockPoisoned)
    }

    /// Run several queries against one consistent state.
    pub fn read_with<R>(&self, f: impl FnOnce(&VendingMachine) -> R) -> VendingResult<R> {
        Ok(f(&*self.read()?))
    }

    pub fn register_product(&self, product: &VendingMachineProduct) -> VendingResult<()> {
        self.write()?.register_product(product)
    }

    pub fn unregister_product(&self, product: &VendingMachineProduct) -> VendingResult<ProductRecord> {
        self.write()?.unregister_product(product)
    }

    pub fn add_item(&self, lane: &str) -> VendingResult<()> {
        self.write()?.add_item(lane)
    }

    pub fn buy_item(&self, lane: &str) -> VendingResult<()> {
        self.write()?.buy_item(lane)
    }

    pub fn number_of_products(&self) -> VendingResult<usize> {
        self.read_with(|m| m.number_of_products())
    }

    pub fn number_of_items(&self, lane: &str) -> VendingResult<u32> {
        self.read()?.number_of_items(lane)
    }

    pub fn number_of_sales(&self, lane: &str) -> VendingResult<u32> {
        self.read()?.number_of_sales(lane)
    }

    pub fn total_number_of_items(&self) -> VendingResult<u64> {
        self.read_with(|m| m.total_number_of_items())
    }

    /// Owned copy of the best-selling record; see [`ProductRegistry::most_popular`].
    pub fn most_popular(&self) -> VendingResult<Option<ProductRecord>> {
        let machine = self.read()?;
        let top = machine.most_popular()?.cloned();
        Ok(top)
    }

    pub fn snapshot(&self) -> VendingResult<MachineSnapshot> {
        self.read_with(VendingMachine::snapshot)
    }

    /// Take the machine back out if this is the last handle.
    pub fn into_inner(self) -> Option<VendingMachine> {
        Arc::try_unwrap(self.inner).ok()?.into_inner().ok()
    }
}

impl From<VendingMachine> for SharedVendingMachine {
    fn from(machine: VendingMachine) -> Self {
        Self::new(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn product(lane: &str, description: &str) -> VendingMachineProduct {
        VendingMachineProduct::parse(lane, description).unwrap()
    }

    #[test]
    fn handles_share_one_machine() {
        let shared = SharedVendingMachine::default();
        let other = shared.clone();

        shared.register_product(&product("A1", "Haggis Crisps")).unwrap();
        other.add_item("A1").unwrap();

        assert_eq!(shared.number_of_items("A1").unwrap(), 1);
        assert_eq!(other.number_of_products().unwrap(), 1);
    }

    #[test]
    fn concurrent_sales_never_oversell() {
        let shared = SharedVendingMachine::default();
        shared.register_product(&product("A1", "Haggis Crisps")).unwrap();
        for _ in 0..50 {
            shared.add_item("A1").unwrap();
        }

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || (0..10).filter(|_| shared.buy_item("A1").is_ok()).count())
            })
            .collect();

        let sold: usize = workers.into_iter().map(|w| w.join().unwrap()).sum();
        assert_eq!(sold, 50);
        assert_eq!(shared.number_of_sales("A1").unwrap(), 50);
        assert_eq!(shared.total_number_of_items().unwrap(), 0);
    }

    #[test]
    fn most_popular_returns_an_owned_record() {
        let shared = SharedVendingMachine::default();
        assert!(shared.most_popular().unwrap_err().is_not_registered());

        shared.register_product(&product("A1", "Haggis Crisps")).unwrap();
        assert_eq!(shared.most_popular().unwrap(), None);

        shared.add_item("A1").unwrap();
        shared.buy_item("A1").unwrap();
        let top = shared.most_popular().unwrap().unwrap();
        assert_eq!(top.sale_count(), 1);
    }

    #[test]
    fn read_with_sees_one_state() {
        let shared = SharedVendingMachine::default();
        shared.register_product(&product("A1", "Haggis Crisps")).unwrap();
        shared.add_item("A1").unwrap();

        let (lanes, items) = shared
            .read_with(|m| (m.number_of_lanes(), m.total_number_of_items()))
            .unwrap();
        assert_eq!((lanes, items), (1, 1));
    }

    #[test]
    fn into_inner_requires_the_last_handle() {
        let shared = SharedVendingMachine::default();
        let other = shared.clone();
        assert!(other.into_inner().is_none());
        assert!(shared.into_inner().unwrap().is_empty());
    }
}
