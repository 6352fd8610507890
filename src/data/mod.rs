/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Row>, column index, unique values
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  split    │  per-stratum sampling → (train, test)
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
