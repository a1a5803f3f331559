use common::model::column::{ActionStyle, ActionType, DataType};

use super::state::PreviewTab;

/// Column-scoped messages carry the column's position in the sequence.
#[derive(Clone)]
pub enum Msg {
    SetColumnCount(String),
    SubmitColumnCount,

    SetLabel(usize, String),
    SetDataType(usize, DataType),
    SetOptionInput(usize, String),
    AddOption(usize),
    RemoveOption(usize, usize),
    SetRenderAsBadge(usize, bool),
    SetCurrencySymbol(usize, String),
    SetActionType(usize, ActionType),
    SetActionStyle(usize, ActionStyle),
    SetCustomActionLabel(usize, String),
    SubmitConfiguration,

    BackToCount,
    BackToConfiguration,
    Reset,

    SetTab(PreviewTab),
    CopySnippet,
    CopySucceeded,
    ClearCopied,
}
