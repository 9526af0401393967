/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, date bounds
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  date range predicate → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ aggregate │  metrics + grouped sales for display
///   └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
