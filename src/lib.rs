//! Display formatting for typed columnar query results.
//!
//! Takes the raw decoded value of each cell plus its column's type and unit
//! metadata and converts it into the representation a consumer (table UI,
//! export) expects: ISO-style dates and times, scaled decimal strings,
//! human interval phrases, pandas period strings, and JSON-safe nested
//! values. Formatting is best-effort per cell — a malformed value degrades
//! to a logged warning and a safe fallback instead of aborting the result
//! set.
//!
//! # Example
//!
//! ```
//! use arrow_display_rs::{
//!     map_struct_row_data, CellValue, ColumnType, Field, FormattedValue,
//!     QueryResult, Schema,
//! };
//!
//! let schema = Schema::shared(vec![
//!     Field::new("id", ColumnType::Integer { bits: 32 }),
//!     Field::new("born", ColumnType::Date),
//! ]);
//! let result = QueryResult::new(
//!     schema,
//!     vec![vec![CellValue::Int(1), CellValue::Int(0)]],
//! );
//!
//! let rows = map_struct_row_data(result)?;
//! assert_eq!(
//!     rows[0].get_by_name("born"),
//!     Some(&FormattedValue::Text("1970-01-01".to_string()))
//! );
//! # Ok::<(), arrow_display_rs::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod session;
pub mod types;

// Re-export main types
pub use error::{Error, Result};
pub use format::{
    format_date, format_datetime, format_decimal, format_float, format_interval,
    format_object, format_period, format_period_from_freq, format_time,
    map_column_data, map_struct_row_data,
};
pub use session::{with_savepoint, with_transaction, StatementExecutor};
pub use types::{
    CellValue, ColumnType, Extension, Field, FormattedValue, IntervalClosed,
    IntervalUnit, QueryResult, Row, Schema, SemanticKind, TimeUnit, MAX_SAFE_INTEGER,
};
