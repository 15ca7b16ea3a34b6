pub mod distribution;
pub mod export;
pub mod extract;
pub mod scanner;
pub mod summary;

pub use distribution::{compute_frequency_distribution, ClassRecord, Distribution};
pub use export::{export_csv, export_json, print_distribution, print_summary};
pub use extract::{extract_columns, select_series, ColumnSeries, ExtractOptions};
pub use freq_lens_common::{FreqLensError, Result};
pub use scanner::resolve_paths;
pub use summary::{summarize_sorted, SummaryStats};
