/// Data layer: the country table, the axis registry, and filtering.
///
/// Architecture:
/// ```text
///  country_metrics.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalise once → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │ Dataset   │      │  metric   │  label → Metric (axis map)
///   └──────────┘      └──────────┘
///        │                  │
///        ▼                  ▼
///   ┌──────────┐
///   │  filter   │  FilterSpec predicates → matching rows
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod metric;
pub mod model;
