//! Component state for the table creator wizard.
//!
//! The wizard walks through three steps. The column sequence is created by
//! the count step, edited in place by the configuration step and read by
//! the preview step, which caches the generated listing and sample rows.

use common::model::sequence::ColumnConfigSequence;
use common::sample::SampleRow;

/// Column count pre-filled in the first step.
pub const DEFAULT_COLUMN_COUNT: &str = "3";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    Count,
    Configure,
    Preview,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PreviewTab {
    Table,
    Code,
}

/// Main state container for the `TableWizardComponent`.
///
/// Fields are `pub` because they are accessed by `view`, `steps` and `update`.
pub struct TableWizardComponent {
    pub step: Step,

    /// Raw value of the column count input.
    pub column_count_input: String,

    /// Columns of the current session. Empty until the count is submitted.
    pub columns: ColumnConfigSequence,

    /// Pending enum option text, one entry per column.
    pub option_inputs: Vec<String>,

    pub active_tab: PreviewTab,

    /// Listing generated when entering the preview step.
    pub snippet: String,

    /// Sample rows generated when entering the preview step.
    pub sample_rows: Vec<SampleRow>,

    /// Set for a short while after a successful copy.
    pub copied: bool,
}

impl TableWizardComponent {
    pub fn new() -> Self {
        Self {
            step: Step::Count,
            column_count_input: DEFAULT_COLUMN_COUNT.to_string(),
            columns: ColumnConfigSequence::default(),
            option_inputs: Vec::new(),
            active_tab: PreviewTab::Table,
            snippet: String::new(),
            sample_rows: Vec::new(),
            copied: false,
        }
    }
}
