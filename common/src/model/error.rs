use thiserror::Error;

/// Result type for column configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a column configuration is refused before generation.
///
/// Messages are shown to the user as-is by the wizard and returned as the
/// body of a `400` by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Column count outside the accepted `1..=10` range.
    #[error("column count {count} is outside the valid range [{min}, {max}]")]
    ColumnCountOutOfRange { count: usize, min: usize, max: usize },

    /// A column still has an empty or whitespace-only name.
    #[error("please provide names for all columns (column {} has none)", .index + 1)]
    MissingLabel { index: usize },

    /// An enum column was submitted without any option.
    #[error("please provide options for enum column \"{label}\"")]
    MissingEnumOptions { label: String },
}

impl ConfigError {
    /// Short title used for toast notifications.
    pub fn title(&self) -> &'static str {
        match self {
            ConfigError::ColumnCountOutOfRange { count, min, .. } if count < min => {
                "Invalid column count"
            }
            ConfigError::ColumnCountOutOfRange { .. } => "Too many columns",
            ConfigError::MissingLabel { .. } => "Missing column names",
            ConfigError::MissingEnumOptions { .. } => "Missing enum options",
        }
    }
}
