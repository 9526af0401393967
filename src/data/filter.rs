use chrono::NaiveDate;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Date range filter
// ---------------------------------------------------------------------------

/// Inclusive date bounds chosen by the user.
///
/// `start <= end` is deliberately not enforced: a reversed range is valid
/// input and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The widest range covering the whole dataset.
    pub fn full(dataset: &Dataset) -> Self {
        DateRange {
            start: dataset.min_date,
            end: dataset.max_date,
        }
    }

    /// Whether `date` falls within the inclusive bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Return indices of records whose date falls within `range`.
pub fn filtered_indices(dataset: &Dataset, range: &DateRange) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| range.contains(r.date))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange {
            start: date(start),
            end: date(end),
        }
    }

    fn sample_dataset() -> Dataset {
        let rows = [
            ("2024-01-01", 100.0),
            ("2024-01-02", 200.0),
            ("2024-01-03", 300.0),
            ("2024-01-05", 400.0),
        ];
        let records = rows
            .iter()
            .map(|&(d, sales)| Record {
                date: date(d),
                sales_amount: sales,
                order_count: 1,
                avg_order_value: sales,
                category: "家居".to_string(),
                region: "华南".to_string(),
            })
            .collect();
        Dataset::from_records(records).unwrap()
    }

    #[test]
    fn filtered_view_is_a_subset_within_bounds() {
        let ds = sample_dataset();
        let r = range("2024-01-02", "2024-01-03");
        let view = filtered_indices(&ds, &r);
        assert_eq!(view, vec![1, 2]);
        for &i in &view {
            assert!(r.contains(ds.records[i].date));
        }
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        let ds = sample_dataset();
        let view = filtered_indices(&ds, &range("2024-01-01", "2024-01-05"));
        assert_eq!(view.len(), ds.len());
    }

    #[test]
    fn full_range_returns_every_record() {
        let ds = sample_dataset();
        let view = filtered_indices(&ds, &DateRange::full(&ds));
        assert_eq!(view, (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn reversed_range_yields_empty_view() {
        let ds = sample_dataset();
        let view = filtered_indices(&ds, &range("2024-01-05", "2024-01-01"));
        assert!(view.is_empty());
    }

    #[test]
    fn range_outside_dataset_yields_empty_view() {
        let ds = sample_dataset();
        let view = filtered_indices(&ds, &range("2023-06-01", "2023-06-30"));
        assert!(view.is_empty());
    }
}
