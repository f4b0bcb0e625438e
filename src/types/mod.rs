//! Data model for the result display formatter: column types, semantic
//! extensions, fields, schemas, and cell values.

pub mod column_type;
pub mod extension;
pub mod field;
pub mod row;
pub mod value;

pub use column_type::{ColumnType, IntervalUnit, TimeUnit};
pub use extension::{Extension, IntervalClosed};
pub use field::{Field, Schema, SemanticKind};
pub use row::{QueryResult, Row};
pub use value::{CellValue, FormattedValue, MAX_SAFE_INTEGER};
