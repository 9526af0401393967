use std::path::Path;

use chrono::NaiveDate;

use crate::data::aggregate::{self, GroupKey, Metrics};
use crate::data::filter::{filtered_indices, DateRange};
use crate::data::loader;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads).
    pub dataset: Option<Dataset>,

    /// User-selected date bounds; None while no dataset is loaded.
    pub range: Option<DateRange>,

    /// Indices of records passing the current range (refreshed on change).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            range: None,
            visible_indices: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset; the range defaults to its date bounds.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.range = Some(DateRange::full(&dataset));
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Load a file into the state, reporting failure through the status
    /// message.  A failed load keeps any previously loaded dataset.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows spanning {} to {}",
                    dataset.len(),
                    dataset.min_date,
                    dataset.max_date
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Recompute `visible_indices` after a range change.
    pub fn refilter(&mut self) {
        if let (Some(ds), Some(range)) = (&self.dataset, &self.range) {
            self.visible_indices = filtered_indices(ds, range);
        }
    }

    /// Move the start bound.  A start past the end is kept as-is and simply
    /// filters everything out.
    pub fn set_start(&mut self, start: NaiveDate) {
        if let Some(range) = &mut self.range {
            range.start = start;
            self.refilter();
        }
    }

    /// Move the end bound.
    pub fn set_end(&mut self, end: NaiveDate) {
        if let Some(range) = &mut self.range {
            range.end = end;
            self.refilter();
        }
    }

    /// Reset the range to the dataset's full date span.
    pub fn reset_range(&mut self) {
        if let Some(ds) = &self.dataset {
            self.range = Some(DateRange::full(ds));
            self.refilter();
        }
    }

    /// Headline metrics over the current view.
    pub fn metrics(&self) -> Option<Metrics> {
        self.dataset
            .as_ref()
            .map(|ds| aggregate::compute_metrics(ds, &self.visible_indices))
    }

    /// Per-category sales over the current view.
    pub fn category_sales(&self) -> Vec<(String, f64)> {
        self.grouped(GroupKey::Category)
    }

    /// Per-region sales over the current view.
    pub fn region_sales(&self) -> Vec<(String, f64)> {
        self.grouped(GroupKey::Region)
    }

    fn grouped(&self, key: GroupKey) -> Vec<(String, f64)> {
        match &self.dataset {
            Some(ds) => aggregate::sales_by(ds, &self.visible_indices, key)
                .into_iter()
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(d: &str, sales: f64, cat: &str) -> Record {
        Record {
            date: d.parse().unwrap(),
            sales_amount: sales,
            order_count: 1,
            avg_order_value: sales,
            category: cat.to_string(),
            region: "华东".to_string(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(
            Dataset::from_records(vec![
                record("2024-01-01", 100.0, "数码"),
                record("2024-01-02", 200.0, "服装"),
                record("2024-01-03", 300.0, "数码"),
            ])
            .unwrap(),
        );
        state
    }

    #[test]
    fn new_dataset_defaults_to_full_range() {
        let state = loaded_state();
        let range = state.range.unwrap();
        assert_eq!(range.start, "2024-01-01".parse().unwrap());
        assert_eq!(range.end, "2024-01-03".parse().unwrap());
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn moving_a_bound_refilters() {
        let mut state = loaded_state();
        state.set_start("2024-01-02".parse().unwrap());
        assert_eq!(state.visible_indices, vec![1, 2]);
        state.set_end("2024-01-02".parse().unwrap());
        assert_eq!(state.visible_indices, vec![1]);
        state.reset_range();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn grouped_sales_follow_the_current_view() {
        let mut state = loaded_state();
        state.set_start("2024-01-03".parse().unwrap());
        let by_category = state.category_sales();
        assert_eq!(by_category, vec![("数码".to_string(), 300.0)]);
    }

    #[test]
    fn metrics_are_none_without_a_dataset() {
        let state = AppState::default();
        assert!(state.metrics().is_none());
        assert!(state.category_sales().is_empty());
    }
}
