//! The ordered column list of one wizard session.

use serde::{Deserialize, Serialize};

use super::column::{ColumnDescriptor, ColumnKind};
use super::error::{ConfigError, ConfigResult};

pub const MIN_COLUMNS: usize = 1;
pub const MAX_COLUMNS: usize = 10;

/// Ordered columns; the order drives both table layout and generated code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnConfigSequence {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnConfigSequence {
    /// Blank sequence of `count` text columns with ids `column-0`, `column-1`, ...
    pub fn with_len(count: usize) -> ConfigResult<Self> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&count) {
            return Err(ConfigError::ColumnCountOutOfRange {
                count,
                min: MIN_COLUMNS,
                max: MAX_COLUMNS,
            });
        }
        let columns = (0..count)
            .map(|index| ColumnDescriptor::new(format!("column-{}", index), "", ColumnKind::Text))
            .collect();
        Ok(Self { columns })
    }

    pub fn from_columns(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ColumnDescriptor> {
        self.columns.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Presence checks run before generation.
    ///
    /// Every label is checked before any enum options, so a sequence with
    /// both problems reports the missing label.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(index) = self.columns.iter().position(|c| c.label.trim().is_empty()) {
            return Err(ConfigError::MissingLabel { index });
        }
        for column in &self.columns {
            if let ColumnKind::Enum { options, .. } = &column.kind {
                if options.is_empty() {
                    return Err(ConfigError::MissingEnumOptions {
                        label: column.label.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ColumnConfigSequence {
    type Item = &'a ColumnDescriptor;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

impl From<Vec<ColumnDescriptor>> for ColumnConfigSequence {
    fn from(columns: Vec<ColumnDescriptor>) -> Self {
        Self::from_columns(columns)
    }
}
