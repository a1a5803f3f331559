//! JSON payloads exchanged with the backend's `/api/tables` endpoints.

use serde::{Deserialize, Serialize};

use crate::model::sequence::ColumnConfigSequence;
use crate::sample::{DEFAULT_ROW_COUNT, SampleRow};

/// Upper bound on preview rows served per request.
pub const MAX_PREVIEW_ROWS: usize = 50;

/// Body of `POST /api/tables/snippet`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompileRequest {
    pub columns: ColumnConfigSequence,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnippetResponse {
    pub code: String,
}

/// Body of `POST /api/tables/preview`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub columns: ColumnConfigSequence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
}

impl PreviewRequest {
    /// Requested row count, defaulted and clamped to `1..=MAX_PREVIEW_ROWS`.
    pub fn effective_row_count(&self) -> usize {
        self.row_count
            .unwrap_or(DEFAULT_ROW_COUNT)
            .clamp(1, MAX_PREVIEW_ROWS)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewResponse {
    pub rows: Vec<SampleRow>,
}
