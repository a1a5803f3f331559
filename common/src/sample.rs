//! Synthetic rows for the live table preview.
//!
//! Values are a pure function of the column and the 0-based row number, so
//! the same configuration always previews the same rows. Action columns get
//! no value; their cells are drawn from the column alone.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::column::{ColumnDescriptor, ColumnKind};

pub const DEFAULT_ROW_COUNT: usize = 3;

/// Placeholder used by enum columns that have no options yet.
pub const ENUM_FALLBACK: &str = "Option";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleValue {
    Number(i64),
    Price(f64),
    Text(String),
}

impl SampleValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SampleValue::Number(n) => Some(*n as f64),
            SampleValue::Price(p) => Some(*p),
            SampleValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for SampleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleValue::Number(n) => write!(f, "{}", n),
            SampleValue::Price(p) => write!(f, "{}", p),
            SampleValue::Text(t) => f.write_str(t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    /// `row-1`, `row-2`, ...
    pub id: String,
    /// Column id to value, in column order.
    pub values: IndexMap<String, SampleValue>,
}

impl SampleRow {
    pub fn get(&self, column_id: &str) -> Option<&SampleValue> {
        self.values.get(column_id)
    }
}

/// Builds `row_count` preview rows for `columns`.
pub fn synthesize<'a, I>(columns: I, row_count: usize) -> Vec<SampleRow>
where
    I: IntoIterator<Item = &'a ColumnDescriptor>,
    I::IntoIter: Clone,
{
    let columns = columns.into_iter();
    (0..row_count)
        .map(|i| SampleRow {
            id: format!("row-{}", i + 1),
            values: columns
                .clone()
                .filter_map(|c| sample_value(c, i).map(|v| (c.id.clone(), v)))
                .collect(),
        })
        .collect()
}

/// Value of `column` at 0-based row `i`; `None` for action columns.
pub fn sample_value(column: &ColumnDescriptor, i: usize) -> Option<SampleValue> {
    let n = i + 1;
    let value = match &column.kind {
        ColumnKind::Text => SampleValue::Text(format!("Sample {} {}", column.label, n)),
        ColumnKind::Number => SampleValue::Number(n as i64 * 10),
        ColumnKind::Price { .. } => SampleValue::Price(n as f64 * 19.99),
        ColumnKind::Enum { options, .. } => SampleValue::Text(if options.is_empty() {
            ENUM_FALLBACK.to_string()
        } else {
            options[i % options.len()].clone()
        }),
        ColumnKind::AutoId => SampleValue::Text(format!("ID-{}", 100 + i)),
        ColumnKind::Action { .. } => return None,
    };
    Some(value)
}
