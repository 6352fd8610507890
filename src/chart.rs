use crate::data::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// ProportionChart – explicit figure object for the split visualization
// ---------------------------------------------------------------------------

/// One bar series of a [`ProportionChart`]: a name plus per-label counts
/// aligned with the chart's label axis.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub name: String,
    pub counts: Vec<u64>,
}

/// Label-frequency bar chart data for a stratified split: the counts of each
/// label value in test, train and the full dataset.
///
/// This is a plain figure object; rendering it is the viewer's job, so
/// repeated splits never draw onto a shared canvas.
#[derive(Debug, Clone)]
pub struct ProportionChart {
    pub title: String,
    /// Which column the labels come from.
    pub label_column: String,
    /// Distinct label values, sorted; the x axis of the chart.
    pub labels: Vec<CellValue>,
    /// Series order: test, train, full dataset.
    pub series: Vec<ChartSeries>,
}

/// Build the label-proportion chart for a completed split.
///
/// Labels come from the full dataset's unique values, so every stratum shows
/// up on the axis even when one of the subsets received no row from it.
pub fn proportion_chart(
    dataset: &Dataset,
    train: &Dataset,
    test: &Dataset,
    label_column: &str,
) -> ProportionChart {
    let labels: Vec<CellValue> = dataset
        .unique_values
        .get(label_column)
        .map(|vals| vals.iter().cloned().collect())
        .unwrap_or_default();

    let series = [("test", test), ("train", train), ("total", dataset)]
        .into_iter()
        .map(|(name, ds)| {
            let counts = ds.value_counts(label_column);
            ChartSeries {
                name: name.to_string(),
                counts: labels
                    .iter()
                    .map(|l| counts.get(l).copied().unwrap_or(0) as u64)
                    .collect(),
            }
        })
        .collect();

    ProportionChart {
        title: "Labels Proportion in Data Partitioning".to_string(),
        label_column: label_column.to_string(),
        labels,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn series_counts_align_with_sorted_labels() {
        let full = labeled_dataset(&["a", "a", "b", "b", "b", "c"]);
        let train = full.take(&[0, 2, 3, 5]);
        let test = full.take(&[1, 4]);

        let chart = proportion_chart(&full, &train, &test, "label");
        assert_eq!(chart.labels.len(), 3);
        assert_eq!(chart.series[0].name, "test");
        // test holds one "a" and one "b", no "c"
        assert_eq!(chart.series[0].counts, vec![1, 1, 0]);
        assert_eq!(chart.series[1].counts, vec![1, 2, 1]);
        assert_eq!(chart.series[2].counts, vec![2, 3, 1]);
    }

    #[test]
    fn every_label_appears_even_when_absent_from_a_subset() {
        let full = labeled_dataset(&["x", "y"]);
        let train = full.take(&[0, 1]);
        let test = full.take(&[]);
        let chart = proportion_chart(&full, &train, &test, "label");
        assert_eq!(chart.series[0].counts, vec![0, 0]);
        assert_eq!(chart.series[2].counts, vec![1, 1]);
    }
}
