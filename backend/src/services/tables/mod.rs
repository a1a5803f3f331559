//! # Table Generation Service Module
//!
//! Endpoints under `/api/tables` exposing the generators in `common` to
//! clients other than the embedded wizard.
//!
//! ## Sub-modules:
//! - `snippet`: validates a column list and returns the generated listing.
//! - `preview`: validates a column list and returns synthetic sample rows.

mod preview;
mod snippet;

use actix_web::web::{post, scope};
use actix_web::{HttpResponse, Scope};
use common::model::error::ConfigError;
use serde_json::json;

/// The base path for all table-generation endpoints.
const API_PATH: &str = "/api/tables";

/// Configures and returns the Actix `Scope` for table-generation routes.
///
/// # Registered Routes:
///
/// *   **`POST /snippet`**:
///     - **Handler**: `snippet::process`
///     - **Description**: Expects a `CompileRequest` (`{"columns": [...]}`) and
///       answers with a `SnippetResponse` holding the full `Table.tsx` listing.
///
/// *   **`POST /preview`**:
///     - **Handler**: `preview::process`
///     - **Description**: Expects a `PreviewRequest` with an optional
///       `rowCount` and answers with a `PreviewResponse` of sample rows.
///
/// Both answer `400` with `{"title", "message"}` when the columns fail
/// validation.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/snippet", post().to(snippet::process))
        .route("/preview", post().to(preview::process))
}

fn rejected(err: &ConfigError) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "title": err.title(),
        "message": err.to_string(),
    }))
}
