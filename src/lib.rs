//! Stratified train/test splitting for labeled tabular data.
//!
//! The core entry point is [`split::split_stratified`]: given a [`data::model::Dataset`]
//! and a label column, it partitions the rows into disjoint train and test
//! subsets whose label distributions each match the original's, sampling
//! without replacement within every stratum.
//!
//! ```
//! use std::collections::BTreeMap;
//! use strata_split::data::model::{CellValue, Dataset};
//! use strata_split::split::{split_stratified, SplitOptions};
//!
//! let records = ["A", "A", "A", "A", "B", "B"]
//!     .iter()
//!     .map(|&label| {
//!         let mut cells = BTreeMap::new();
//!         cells.insert("species".to_string(), CellValue::String(label.to_string()));
//!         cells
//!     })
//!     .collect();
//! let dataset = Dataset::from_records(records);
//!
//! let opts = SplitOptions {
//!     test_fraction: 0.5,
//!     seed: Some(42),
//!     shuffle: false,
//!     visualize: false,
//! };
//! let split = split_stratified(&dataset, "species", &opts).unwrap();
//! assert_eq!(split.train.len() + split.test.len(), dataset.len());
//! ```
//!
//! The `strata-split` binary is an egui viewer that loads a `.csv`, `.json`
//! or `.parquet` table, runs the split interactively and renders the label
//! proportions of test, train and the full dataset as a grouped bar chart.

pub mod app;
pub mod chart;
pub mod color;
pub mod data;
pub mod split;
pub mod state;
pub mod ui;
