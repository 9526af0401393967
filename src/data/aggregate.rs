use std::collections::BTreeMap;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Scalar metrics
// ---------------------------------------------------------------------------

/// Headline numbers over the filtered view.
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    pub total_sales: f64,
    pub total_orders: u64,
    /// Mean of the per-row average order value.  NaN over an empty view;
    /// callers render it as-is rather than guarding.
    pub avg_order_value: f64,
}

/// Sum and average the numeric fields over the given record indices.
pub fn compute_metrics(dataset: &Dataset, view: &[usize]) -> Metrics {
    let total_sales = view
        .iter()
        .map(|&i| dataset.records[i].sales_amount)
        .sum();
    let total_orders = view.iter().map(|&i| dataset.records[i].order_count).sum();
    let aov_sum: f64 = view
        .iter()
        .map(|&i| dataset.records[i].avg_order_value)
        .sum();
    // 0.0 / 0.0 when the view is empty.
    let avg_order_value = aov_sum / view.len() as f64;

    Metrics {
        total_sales,
        total_orders,
        avg_order_value,
    }
}

// ---------------------------------------------------------------------------
// Grouped sales
// ---------------------------------------------------------------------------

/// Which string column to group sales by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Category,
    Region,
}

/// Sum `sales_amount` per distinct key value.  Keys come back in sorted
/// order, which is all the charts need.
pub fn sales_by(dataset: &Dataset, view: &[usize], key: GroupKey) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for &i in view {
        let record = &dataset.records[i];
        let name = match key {
            GroupKey::Category => &record.category,
            GroupKey::Region => &record.region,
        };
        *sums.entry(name.clone()).or_insert(0.0) += record.sales_amount;
    }
    sums
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, DateRange};
    use crate::data::model::Record;

    fn record(d: &str, sales: f64, orders: u64, aov: f64, cat: &str, reg: &str) -> Record {
        Record {
            date: d.parse().unwrap(),
            sales_amount: sales,
            order_count: orders,
            avg_order_value: aov,
            category: cat.to_string(),
            region: reg.to_string(),
        }
    }

    fn two_day_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("2024-01-01", 100.0, 4, 25.0, "数码", "华东"),
            record("2024-01-02", 200.0, 5, 40.0, "服装", "华北"),
        ])
        .unwrap()
    }

    #[test]
    fn metrics_over_full_view() {
        let ds = two_day_dataset();
        let view: Vec<usize> = (0..ds.len()).collect();
        let m = compute_metrics(&ds, &view);
        assert_eq!(m.total_sales, 300.0);
        assert_eq!(m.total_orders, 9);
        assert_eq!(m.avg_order_value, 32.5);
    }

    #[test]
    fn single_day_filter_keeps_only_that_row() {
        let ds = two_day_dataset();
        let range = DateRange {
            start: "2024-01-01".parse().unwrap(),
            end: "2024-01-01".parse().unwrap(),
        };
        let view = filtered_indices(&ds, &range);
        let m = compute_metrics(&ds, &view);
        assert_eq!(m.total_sales, 100.0);
        assert_eq!(m.total_orders, 4);
        assert_eq!(m.avg_order_value, 25.0);
    }

    #[test]
    fn empty_view_sums_to_zero_and_mean_is_nan() {
        let ds = two_day_dataset();
        let m = compute_metrics(&ds, &[]);
        assert_eq!(m.total_sales, 0.0);
        assert_eq!(m.total_orders, 0);
        assert!(m.avg_order_value.is_nan());
    }

    #[test]
    fn reversed_range_gives_zero_sales() {
        let ds = two_day_dataset();
        let range = DateRange {
            start: "2024-01-02".parse().unwrap(),
            end: "2024-01-01".parse().unwrap(),
        };
        let view = filtered_indices(&ds, &range);
        assert!(view.is_empty());
        assert_eq!(compute_metrics(&ds, &view).total_sales, 0.0);
    }

    #[test]
    fn category_sums_add_up_to_total_sales() {
        let ds = Dataset::from_records(vec![
            record("2024-01-01", 100.0, 4, 25.0, "数码", "华东"),
            record("2024-01-01", 50.0, 2, 25.0, "服装", "华东"),
            record("2024-01-02", 200.0, 5, 40.0, "数码", "华北"),
        ])
        .unwrap();
        let view: Vec<usize> = (0..ds.len()).collect();

        let by_category = sales_by(&ds, &view, GroupKey::Category);
        assert_eq!(by_category["数码"], 300.0);
        assert_eq!(by_category["服装"], 50.0);

        let total = compute_metrics(&ds, &view).total_sales;
        let grouped: f64 = by_category.values().sum();
        assert_eq!(grouped, total);
    }

    #[test]
    fn region_grouping_uses_the_region_column() {
        let ds = Dataset::from_records(vec![
            record("2024-01-01", 100.0, 4, 25.0, "数码", "华东"),
            record("2024-01-02", 200.0, 5, 40.0, "服装", "华东"),
            record("2024-01-03", 40.0, 1, 40.0, "服装", "西部"),
        ])
        .unwrap();
        let view: Vec<usize> = (0..ds.len()).collect();
        let by_region = sales_by(&ds, &view, GroupKey::Region);
        assert_eq!(by_region.len(), 2);
        assert_eq!(by_region["华东"], 300.0);
        assert_eq!(by_region["西部"], 40.0);
    }

    #[test]
    fn grouping_an_empty_view_is_empty() {
        let ds = two_day_dataset();
        assert!(sales_by(&ds, &[], GroupKey::Category).is_empty());
    }
}
