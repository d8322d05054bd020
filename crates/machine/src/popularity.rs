//! "Most popular" resolution.
//!
//! The record with the highest sale count wins. Ties go to the record that was
//! registered first. Records that have never sold are not candidates, so a
//! machine with no sales has no most popular product.

use core::cmp::Reverse;

use crate::record::ProductRecord;

pub fn most_popular<'a, I>(records: I) -> Option<&'a ProductRecord>
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    records
        .into_iter()
        .filter(|r| r.sale_count() > 0)
        .max_by_key(|r| (r.sale_count(), Reverse(r.registration())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::VendingMachineProduct;

    fn sold(lane: &str, registration: u64, sales: u32) -> ProductRecord {
        let product = VendingMachineProduct::parse(lane, lane).unwrap();
        let mut record = ProductRecord::registered(product, registration);
        for _ in 0..sales {
            record.add_item();
            record.buy_item().unwrap();
        }
        record
    }

    #[test]
    fn highest_sale_count_wins() {
        let records = [sold("A1", 0, 2), sold("A2", 1, 5), sold("A3", 2, 1)];
        let top = most_popular(&records).unwrap();
        assert_eq!(top.lane_code().as_str(), "A2");
    }

    #[test]
    fn no_sales_means_no_result() {
        let records = [sold("A1", 0, 0), sold("A2", 1, 0)];
        assert!(most_popular(&records).is_none());
        assert!(most_popular(&Vec::<ProductRecord>::new()).is_none());
    }

    #[test]
    fn ties_go_to_the_earliest_registration() {
        let records = [sold("B1", 3, 4), sold("A1", 1, 4), sold("C1", 2, 4)];
        let top = most_popular(&records).unwrap();
        assert_eq!(top.lane_code().as_str(), "A1");
    }
}
