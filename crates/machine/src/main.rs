use anyhow::Context;

use vending_machine::{ProductRegistry, VendingFactory};

const PLANOGRAM: &[(&str, &str, u32)] = &[
    ("A1", "Haggis Crisps", 4),
    ("A2", "Haggis Crisps", 2),
    ("B1", "Irn Bru", 6),
    ("B2", "Tablet", 3),
];

const SALES: &[&str] = &["B1", "B1", "A1", "B2", "B1", "A2"];

fn main() -> anyhow::Result<()> {
    vending_observability::init();

    let factory = VendingFactory::new();
    let mut machine = factory.make_vending_machine();

    for &(lane, description, items) in PLANOGRAM {
        let product = factory
            .make_vending_machine_product(lane, description)
            .with_context(|| format!("invalid lane code {lane:?}"))?;
        machine.register_product(&product)?;
        for _ in 0..items {
            machine.add_item(lane)?;
        }
    }
    tracing::info!(
        lanes = machine.number_of_lanes(),
        products = machine.number_of_products(),
        items = machine.total_number_of_items(),
        "machine stocked"
    );

    for lane in SALES {
        machine
            .buy_item(lane)
            .with_context(|| format!("sale from lane {lane} failed"))?;
    }

    if let Some(top) = machine.most_popular()? {
        tracing::info!(lane = %top.lane_code(), sales = top.sale_count(), "most popular: {}", top.description());
    }

    let snapshot = serde_json::to_string_pretty(&machine.snapshot())?;
    println!("{snapshot}");
    Ok(())
}
