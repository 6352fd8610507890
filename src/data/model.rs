use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
/// Using `BTreeMap` / `BTreeSet` downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date string kept as text for simplicity.
    Date(String),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
                Date(_) => 5,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) | (Date(a), Date(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) | CellValue::Date(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one row of the dataset
// ---------------------------------------------------------------------------

/// Stable row identifier, unique within a [`Dataset`] and preserved when
/// subsets are constructed, so disjointness and completeness of a split can
/// be checked at the identifier level.
pub type RowId = u64;

/// A single row: a stable identifier plus named cells.
#[derive(Debug, Clone)]
pub struct Row {
    pub id: RowId,
    /// Dynamic columns: column_name → value.
    pub cells: BTreeMap<String, CellValue>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete labeled table
// ---------------------------------------------------------------------------

/// The full table with pre-computed column indices.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All rows, in order.
    pub rows: Vec<Row>,
    /// Ordered list of column names.
    pub column_names: Vec<String>,
    /// For each column the sorted set of unique values.
    pub unique_values: BTreeMap<String, BTreeSet<CellValue>>,
}

impl Dataset {
    /// Build column indices from the given rows, keeping their identifiers.
    ///
    /// A row lacking a column counts as `CellValue::Null` for it, so the
    /// column's unique-value set covers every row (rows are heterogeneous
    /// e.g. when JSON records omit a key).
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut column_names_set: BTreeSet<String> = BTreeSet::new();
        for row in &rows {
            for col in row.cells.keys() {
                column_names_set.insert(col.clone());
            }
        }

        let mut unique_values: BTreeMap<String, BTreeSet<CellValue>> = BTreeMap::new();
        for row in &rows {
            for col in &column_names_set {
                let val = row.cells.get(col).unwrap_or(&CellValue::Null);
                unique_values
                    .entry(col.clone())
                    .or_default()
                    .insert(val.clone());
            }
        }
        let column_names: Vec<String> = column_names_set.into_iter().collect();
        Dataset {
            rows,
            column_names,
            unique_values,
        }
    }

    /// Build a dataset from bare cell maps, assigning identifiers `0..n` in
    /// input order.
    pub fn from_records(records: Vec<BTreeMap<String, CellValue>>) -> Self {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(i, cells)| Row {
                id: i as RowId,
                cells,
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a column of this name exists.
    pub fn has_column(&self, column: &str) -> bool {
        self.unique_values.contains_key(column)
    }

    /// Row identifiers of every row whose cell in `column` equals `value`,
    /// in dataset order. Rows lacking the column match `CellValue::Null`.
    pub fn ids_where(&self, column: &str, value: &CellValue) -> Vec<RowId> {
        self.rows
            .iter()
            .filter(|row| row.cells.get(column).unwrap_or(&CellValue::Null) == value)
            .map(|row| row.id)
            .collect()
    }

    /// Frequency of each distinct value in `column`.
    pub fn value_counts(&self, column: &str) -> BTreeMap<CellValue, usize> {
        let mut counts: BTreeMap<CellValue, usize> = BTreeMap::new();
        for row in &self.rows {
            let val = row.cells.get(column).cloned().unwrap_or(CellValue::Null);
            *counts.entry(val).or_insert(0) += 1;
        }
        counts
    }

    /// New dataset holding clones of the addressed rows, in the order the
    /// identifiers are given. Unknown identifiers are skipped.
    pub fn take(&self, ids: &[RowId]) -> Dataset {
        let by_id: BTreeMap<RowId, &Row> =
            self.rows.iter().map(|row| (row.id, row)).collect();
        let rows: Vec<Row> = ids
            .iter()
            .filter_map(|id| by_id.get(id).map(|&row| row.clone()))
            .collect();
        Self::from_rows(rows)
    }
}
