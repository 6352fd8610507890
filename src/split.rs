use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::chart::{self, ProportionChart};
use crate::data::model::{Dataset, RowId};

// ---------------------------------------------------------------------------
// Options & errors
// ---------------------------------------------------------------------------

/// Options for [`split_stratified`].
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Fraction of each stratum allocated to test, in the open interval
    /// (0, 1). Train size is implicitly `1 - test_fraction` per stratum.
    pub test_fraction: f64,
    /// Seed for the random generator. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Reorder the train and test outputs after splitting (the per-stratum
    /// construction leaves rows grouped by label).
    pub shuffle: bool,
    /// Build a [`ProportionChart`] of the label counts in test, train and
    /// the full dataset alongside the split.
    pub visualize: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            test_fraction: 0.25,
            seed: None,
            shuffle: true,
            visualize: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("label column '{0}' does not exist in the dataset")]
    UnknownColumn(String),
    #[error("test_fraction must be within (0, 1), got {0}")]
    InvalidFraction(f64),
}

/// Result of a stratified split: two disjoint datasets whose union is the
/// input's row set, plus the optional proportion chart.
#[derive(Debug, Clone)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
    /// Present only when [`SplitOptions::visualize`] was set.
    pub chart: Option<ProportionChart>,
}

// ---------------------------------------------------------------------------
// Stratified splitter
// ---------------------------------------------------------------------------

/// Partition `dataset` into train and test subsets in a stratified fashion,
/// keeping the same proportion of `label_column` values as in the original
/// data.
///
/// Each stratum (the rows sharing one distinct value of `label_column`)
/// contributes `round(test_fraction × stratum_size)` rows to test, sampled
/// without replacement; the remainder goes to train. Rounding is half away
/// from zero, so a stratum of one row with a small fraction goes entirely to
/// train — no row is ever split.
///
/// With a fixed `seed` the sampled row-identifier sets are reproducible, and
/// identical whether or not `shuffle` is requested; `shuffle` only destroys
/// the stratum-major construction order of the outputs.
///
/// `test_fraction` values of exactly 0.0 or 1.0 are rejected as
/// [`SplitError::InvalidFraction`].
pub fn split_stratified(
    dataset: &Dataset,
    label_column: &str,
    opts: &SplitOptions,
) -> Result<Split, SplitError> {
    if !(opts.test_fraction > 0.0 && opts.test_fraction < 1.0) {
        return Err(SplitError::InvalidFraction(opts.test_fraction));
    }
    let labels = dataset
        .unique_values
        .get(label_column)
        .ok_or_else(|| SplitError::UnknownColumn(label_column.to_string()))?;

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut test_ids: Vec<RowId> = Vec::new();
    let mut train_ids: Vec<RowId> = Vec::new();

    // BTreeSet iteration order fixes the stratum visiting order, so a fixed
    // seed reproduces the exact same draws.
    for label in labels {
        let stratum = dataset.ids_where(label_column, label);
        let n_test = (opts.test_fraction * stratum.len() as f64).round() as usize;

        let picked = rand::seq::index::sample(&mut rng, stratum.len(), n_test);
        let picked_set: std::collections::BTreeSet<usize> = picked.iter().collect();

        test_ids.extend(picked.iter().map(|i| stratum[i]));
        train_ids.extend(
            stratum
                .iter()
                .enumerate()
                .filter(|(i, _)| !picked_set.contains(i))
                .map(|(_, &id)| id),
        );

        debug!(
            "stratum '{label}': {} rows, {} to test, {} to train",
            stratum.len(),
            n_test,
            stratum.len() - n_test
        );
    }

    if opts.shuffle {
        test_ids.shuffle(&mut rng);
        train_ids.shuffle(&mut rng);
    }

    let train = dataset.take(&train_ids);
    let test = dataset.take(&test_ids);

    info!(
        "stratified split by '{label_column}': {} train / {} test of {} rows",
        train.len(),
        test.len(),
        dataset.len()
    );

    let chart = opts
        .visualize
        .then(|| chart::proportion_chart(dataset, &train, &test, label_column));

    Ok(Split { train, test, chart })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use std::collections::BTreeMap;

    fn labeled_dataset(labels: &[&str]) -> Dataset {
        let records = labels
            .iter()
            .map(|&l| {
                let mut cells = BTreeMap::new();
                cells.insert("label".to_string(), CellValue::String(l.to_string()));
                cells
            })
            .collect();
        Dataset::from_records(records)
    }

    fn label_count(ds: &Dataset, label: &str) -> usize {
        ds.value_counts("label")
            .get(&CellValue::String(label.to_string()))
            .copied()
            .unwrap_or(0)
    }

    #[test]
    fn six_a_four_b_half_fraction() {
        let ds = labeled_dataset(&["A", "A", "A", "A", "A", "A", "B", "B", "B", "B"]);
        let opts = SplitOptions {
            test_fraction: 0.5,
            seed: Some(1),
            shuffle: false,
            visualize: false,
        };
        let split = split_stratified(&ds, "label", &opts).unwrap();

        assert_eq!(label_count(&split.test, "A"), 3);
        assert_eq!(label_count(&split.test, "B"), 2);
        assert_eq!(label_count(&split.train, "A"), 3);
        assert_eq!(label_count(&split.train, "B"), 2);
        assert_eq!(split.test.len(), 5);
        assert_eq!(split.train.len(), 5);
    }

    #[test]
    fn singleton_stratum_goes_to_train() {
        let ds = labeled_dataset(&["A", "A", "A", "A", "rare"]);
        let opts = SplitOptions {
            test_fraction: 0.25,
            seed: Some(7),
            shuffle: false,
            visualize: false,
        };
        let split = split_stratified(&ds, "label", &opts).unwrap();
        assert_eq!(label_count(&split.train, "rare"), 1);
        assert_eq!(label_count(&split.test, "rare"), 0);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 0.25 × 2 = 0.5 rounds up to 1.
        let ds = labeled_dataset(&["A", "A"]);
        let opts = SplitOptions {
            test_fraction: 0.25,
            seed: Some(0),
            shuffle: false,
            visualize: false,
        };
        let split = split_stratified(&ds, "label", &opts).unwrap();
        assert_eq!(split.test.len(), 1);
        assert_eq!(split.train.len(), 1);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let ds = labeled_dataset(&["A", "B"]);
        let err = split_stratified(&ds, "nonexistent_column", &SplitOptions::default())
            .unwrap_err();
        assert!(matches!(err, SplitError::UnknownColumn(_)));
    }

    #[test]
    fn fraction_boundaries_are_rejected() {
        let ds = labeled_dataset(&["A", "B"]);
        for bad in [0.0, 1.0, -0.1, 1.5] {
            let opts = SplitOptions {
                test_fraction: bad,
                ..SplitOptions::default()
            };
            let err = split_stratified(&ds, "label", &opts).unwrap_err();
            assert!(matches!(err, SplitError::InvalidFraction(_)));
        }
    }

    #[test]
    fn chart_is_built_only_when_requested() {
        let ds = labeled_dataset(&["A", "A", "B", "B"]);
        let mut opts = SplitOptions {
            test_fraction: 0.5,
            seed: Some(3),
            shuffle: false,
            visualize: false,
        };
        assert!(split_stratified(&ds, "label", &opts).unwrap().chart.is_none());

        opts.visualize = true;
        let chart = split_stratified(&ds, "label", &opts)
            .unwrap()
            .chart
            .unwrap();
        assert_eq!(chart.series.len(), 3);
    }
}
