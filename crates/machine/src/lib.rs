//! Vending machine product registry.
//!
//! Lanes are registered with products, stocked, and sold from. The registry is
//! plain in-memory domain logic; [`SharedVendingMachine`] adds a lock for callers
//! that need to share one machine across threads.

pub mod factory;
pub mod machine;
pub mod popularity;
pub mod product;
pub mod record;
pub mod registry;
pub mod shared;
pub mod snapshot;

pub use factory::VendingFactory;
pub use machine::VendingMachine;
pub use product::VendingMachineProduct;
pub use record::ProductRecord;
pub use registry::ProductRegistry;
pub use shared::SharedVendingMachine;
pub use snapshot::MachineSnapshot;

pub use vending_core::{LaneCode, VendingError, VendingResult};
