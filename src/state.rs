use crate::data::model::Dataset;
use crate::split::{split_stratified, Split, SplitOptions};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Which column forms the strata.
    pub label_column: Option<String>,

    /// Fraction of each stratum sent to test.
    pub test_fraction: f64,

    /// Seed text box contents; empty means "draw from entropy".
    pub seed_text: String,

    /// Shuffle the outputs after splitting.
    pub shuffle: bool,

    /// Last computed split, with its proportion chart.
    pub split: Option<Split>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            label_column: None,
            test_fraction: 0.25,
            seed_text: String::new(),
            shuffle: true,
            split: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and pick a default label column.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.label_column = dataset.column_names.first().cloned();
        self.dataset = Some(dataset);
        self.split = None;
        self.status_message = None;
        self.resplit();
    }

    /// Parse the seed text box. Empty → None; garbage → None with a message.
    pub fn seed(&mut self) -> Option<u64> {
        let trimmed = self.seed_text.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                self.status_message = Some(format!("Seed '{trimmed}' is not a number"));
                None
            }
        }
    }

    /// Recompute the split from the current controls.
    pub fn resplit(&mut self) {
        let seed = self.seed();
        let Some(dataset) = &self.dataset else {
            return;
        };
        let Some(label_column) = self.label_column.clone() else {
            return;
        };

        let opts = SplitOptions {
            test_fraction: self.test_fraction,
            seed,
            shuffle: self.shuffle,
            visualize: true,
        };
        let result = split_stratified(dataset, &label_column, &opts);
        match result {
            Ok(split) => {
                self.split = Some(split);
                self.status_message = None;
            }
            Err(e) => {
                self.split = None;
                self.status_message = Some(format!("Split failed: {e}"));
            }
        }
    }

    /// Change the label column and re-split.
    pub fn set_label_column(&mut self, column: String) {
        self.label_column = Some(column);
        self.resplit();
    }
}
